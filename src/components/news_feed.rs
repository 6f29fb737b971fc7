use chrono::Local;
use yew::prelude::*;

use crate::model::SAMPLE_NEWS;

/// News list in fixed order plus a "last updated" stamp taken once at mount.
#[function_component(NewsFeed)]
pub fn news_feed() -> Html {
    let updated_at = use_state(|| Local::now().format("%d/%m/%Y %H:%M").to_string());

    html! {
        <div class="news-feed">
            <div class="news-list">
                {
                    for SAMPLE_NEWS.iter().map(|n| html! {
                        <div class="news-item" key={n.id.to_string()}>
                            <div class="news-thumb">{"N"}</div>
                            <div class="news-content">
                                <h4 class="news-title">{n.title}</h4>
                                <p class="news-desc">{n.desc}</p>
                                <div class="news-time">{n.time}</div>
                            </div>
                        </div>
                    })
                }
            </div>
            <p class="news-updated">{format!("Última actualización: {}", *updated_at)}</p>
            <style>
                {r#"
                .news-feed {
                    max-width: 700px;
                    margin: 0 auto;
                }

                .news-item {
                    display: flex;
                    gap: 1rem;
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                    margin-bottom: 1rem;
                }

                .news-thumb {
                    flex-shrink: 0;
                    width: 48px;
                    height: 48px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #0f172a;
                    color: #fff;
                    font-weight: bold;
                    border-radius: 10px;
                }

                .news-title {
                    color: #0f172a;
                    margin-bottom: 0.25rem;
                }

                .news-desc {
                    color: #475569;
                    line-height: 1.5;
                }

                .news-time {
                    color: #94a3b8;
                    font-size: 0.85rem;
                    margin-top: 0.25rem;
                }

                .news-updated {
                    text-align: right;
                    color: #94a3b8;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </div>
    }
}
