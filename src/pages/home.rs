use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::about::About;
use crate::components::area_grid::AreaGrid;
use crate::components::news_feed::NewsFeed;
use crate::components::question_board::QuestionBoard;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_join = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(config::get_login_url());
        }
    });

    html! {
        <main class="home-page">
            <section id="inicio" data-color="#2563eb" class="hero">
                <h1>{"Bienvenido a CampusLink"}</h1>
                <p>
                    {"La comunidad estudiantil donde resolver dudas, explorar áreas técnicas \
                      y mantenerte al día con las noticias del campus."}
                </p>
                <div class="hero-actions">
                    <button id="btn-join" class="btn-primary" onclick={on_join}>
                        {"Inscríbete"}
                    </button>
                    <a id="btn-more" class="btn-secondary" href="#areas">{"Conoce más"}</a>
                </div>
            </section>

            <section id="areas" data-color="#059669">
                <h2>{"Áreas de formación"}</h2>
                <AreaGrid />
            </section>

            <section id="preguntas" data-color="#d97706">
                <h2>{"Preguntas de la comunidad"}</h2>
                <QuestionBoard />
            </section>

            <section id="noticias" data-color="#dc2626">
                <h2>{"Noticias"}</h2>
                <NewsFeed />
            </section>

            <section id="nosotros" data-color="#7c3aed">
                <h2>{"Sobre nosotros"}</h2>
                <About />
            </section>

            <footer class="site-footer">
                <p>{"© 2025 CampusLink — Comunidad Estudiantil"}</p>
            </footer>

            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                    background: #f1f5f9;
                    color: #0f172a;
                }

                .home-page section {
                    padding: 5rem 2rem;
                    scroll-margin-top: 80px;
                }

                .home-page section > h2 {
                    text-align: center;
                    font-size: 2rem;
                    margin-bottom: 2rem;
                    color: #0f172a;
                }

                .hero {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding-top: 8rem;
                }

                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .hero p {
                    max-width: 600px;
                    color: #475569;
                    font-size: 1.15rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                }

                .btn-primary {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.7rem 1.6rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .btn-primary:hover {
                    background: #1d4ed8;
                }

                .btn-secondary {
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    padding: 0.7rem 1.6rem;
                    font-size: 1rem;
                    color: #334155;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .btn-secondary:hover {
                    border-color: #94a3b8;
                    background: #fff;
                }

                .site-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #94a3b8;
                    font-size: 0.9rem;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }

                    .home-page section {
                        padding: 3.5rem 1rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
