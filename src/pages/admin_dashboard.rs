//! Admin console: trainer roster and forum overview.

use leptos::prelude::*;

use crate::net::types::TrainerStatus;
use crate::state::community::score;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let trainers = LocalResource::new(|| async {
        crate::net::api::fetch_trainers(None).await.unwrap_or_default()
    });
    let posts = LocalResource::new(|| async {
        crate::net::api::fetch_community().await.unwrap_or_default()
    });

    view! {
        <div class="admin-dashboard">
            <h1>"Admin console"</h1>

            <section class="admin-dashboard__trainers">
                <h2>"Trainer roster"</h2>
                <Suspense fallback=move || view! { <p>"Loading trainers..."</p> }>
                    {move || {
                        trainers
                            .get()
                            .map(|list| {
                                view! {
                                    <table class="admin-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Expertise"</th>
                                                <th>"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|t| {
                                                    let status = match t.status {
                                                        TrainerStatus::Accepted => "accepted",
                                                        TrainerStatus::Pending => "pending",
                                                        TrainerStatus::Rejected => "rejected",
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{t.name.clone()}</td>
                                                            <td>{t.expertise.join(", ")}</td>
                                                            <td class=format!("admin-table__status--{status}")>
                                                                {status}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="admin-dashboard__forum">
                <h2>"Forum activity"</h2>
                <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                    {move || {
                        posts
                            .get()
                            .map(|list| {
                                view! {
                                    <ul class="admin-dashboard__posts">
                                        {list
                                            .into_iter()
                                            .map(|p| {
                                                let net = score(&p);
                                                view! {
                                                    <li>
                                                        <span>{p.title.clone()}</span>
                                                        <span class="admin-dashboard__score">
                                                            {format!("{net:+}")}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
