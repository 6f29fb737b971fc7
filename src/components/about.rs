use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Cap for the decorative image so it never outgrows its column.
const ABOUT_IMAGE_MAX_HEIGHT: i32 = 320;

/// "Sobre nosotros" panel: a stubbed join action and a decorative image
/// whose height cap is re-applied on every viewport resize.
#[function_component(About)]
pub fn about() -> Html {
    let image_max_height = use_state(|| ABOUT_IMAGE_MAX_HEIGHT);

    {
        let image_max_height = image_max_height.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        image_max_height.set(ABOUT_IMAGE_MAX_HEIGHT);
                    });
                    if window
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "resize",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_join = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Redirigiendo a registro o modal de inscripción.");
        }
    });

    html! {
        <div class="about-panel">
            <div class="about-text">
                <h3>{"Una comunidad hecha por estudiantes"}</h3>
                <p>
                    {"CampusLink conecta aprendices de todas las áreas técnicas: comparte \
                      preguntas, encuentra respuestas y entérate de las novedades del campus."}
                </p>
                <button class="btn-join-about" onclick={on_join}>{"Únete a la comunidad"}</button>
            </div>
            <div class="about-media">
                <img
                    src="/assets/campus.jpg"
                    alt="Estudiantes en el campus"
                    style={format!("max-height: {}px;", *image_max_height)}
                />
            </div>
            <style>
                {r#"
                .about-panel {
                    max-width: 1000px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                }

                .about-text {
                    flex: 1;
                }

                .about-text h3 {
                    color: #0f172a;
                    font-size: 1.6rem;
                    margin-bottom: 1rem;
                }

                .about-text p {
                    color: #475569;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .btn-join-about {
                    background: #0f172a;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.4rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .btn-join-about:hover {
                    background: #1e293b;
                }

                .about-media {
                    flex: 1;
                    display: flex;
                    justify-content: center;
                }

                .about-media img {
                    width: 100%;
                    object-fit: cover;
                    border-radius: 16px;
                }

                @media (max-width: 768px) {
                    .about-panel {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
