use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::model::{Area, AreaFilter, BoardAction, BoardState};

/// Community question board: category chips, live search and the question
/// cards themselves. All interactions dispatch a [`BoardAction`]; the list
/// is a pure projection of the reducer state.
#[function_component(QuestionBoard)]
pub fn question_board() -> Html {
    let board = use_reducer(BoardState::default);

    let on_search = {
        let board = board.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            board.dispatch(BoardAction::Search(input.value()));
        })
    };

    let on_ask = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(
                "Funcionalidad de preguntar: aquí puedes abrir un modal o formulario para crear una nueva pregunta.",
            );
        }
    });

    let chip = |label: &'static str, value: AreaFilter| {
        let board = board.clone();
        let active = board.filter == value;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            board.dispatch(BoardAction::SelectArea(value));
        });
        html! {
            <button
                class={classes!("chip", active.then(|| "active"))}
                data-area={value.value()}
                {onclick}
            >
                {label}
            </button>
        }
    };

    let visible = board.visible();

    html! {
        <div class="question-board">
            <div class="q-toolbar">
                <div class="q-categories">
                    { chip("Todas", AreaFilter::All) }
                    { for Area::ALL.iter().map(|area| chip(area.label(), AreaFilter::Only(*area))) }
                </div>
                <div class="q-controls">
                    <input
                        type="search"
                        class="q-search"
                        placeholder="Buscar preguntas..."
                        oninput={on_search}
                    />
                    <button class="q-btn q-ask" onclick={on_ask}>{"Preguntar"}</button>
                </div>
            </div>
            <div class="questions-list">
                {
                    if visible.is_empty() {
                        html! {
                            <div class="q-card">
                                <p class="q-body">{"No se encontraron preguntas."}</p>
                            </div>
                        }
                    } else {
                        visible.iter().map(|q| {
                            let id = q.id;
                            let open = board.is_open(id);
                            let toggle = {
                                let board = board.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    board.dispatch(BoardAction::ToggleAnswer(id));
                                })
                            };
                            let like = {
                                let board = board.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    board.dispatch(BoardAction::Like(id));
                                })
                            };
                            html! {
                                <article class="q-card" key={id.to_string()}>
                                    <div class="q-meta">
                                        <strong class="chip q-area-tag">{q.area.tag()}</strong>
                                        <span class="muted">{format!("ID {}", id)}</span>
                                    </div>
                                    <h4 class="q-title">{q.title}</h4>
                                    <p class="q-body">{q.body}</p>
                                    <div class="q-actions">
                                        <button class="q-btn" onclick={toggle}>
                                            { if open { "Ocultar respuesta" } else { "Ver respuesta" } }
                                        </button>
                                        <button class="q-btn" onclick={like}>
                                            {format!("👍 {}", board.likes_for(id))}
                                        </button>
                                        <a class="q-btn" href="#">{"Comentar"}</a>
                                    </div>
                                    <div class={classes!("q-answer", open.then(|| "open"))}>
                                        {q.answer}
                                    </div>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
            <style>
                {r#"
                .question-board {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .q-toolbar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .q-categories {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .chip {
                    border: 1px solid #cbd5e1;
                    background: #fff;
                    color: #334155;
                    border-radius: 999px;
                    padding: 0.35rem 0.9rem;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .chip:hover {
                    border-color: #94a3b8;
                }

                .chip.active {
                    background: #0f172a;
                    border-color: #0f172a;
                    color: #fff;
                }

                .q-controls {
                    display: flex;
                    gap: 0.5rem;
                }

                .q-search {
                    padding: 0.5rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    min-width: 220px;
                }

                .q-btn {
                    border: 1px solid #cbd5e1;
                    background: #fff;
                    color: #334155;
                    border-radius: 8px;
                    padding: 0.4rem 0.9rem;
                    font-size: 0.9rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .q-btn:hover {
                    border-color: #94a3b8;
                    background: #f8fafc;
                }

                .q-ask {
                    background: #0f172a;
                    border-color: #0f172a;
                    color: #fff;
                }

                .q-card {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 1.25rem 1.5rem;
                    margin-bottom: 1rem;
                }

                .q-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                }

                .q-area-tag {
                    background: #eef9f6;
                    color: #065f46;
                    border: none;
                    cursor: default;
                }

                .muted {
                    color: #94a3b8;
                    font-size: 0.85rem;
                }

                .q-title {
                    color: #0f172a;
                    margin-bottom: 0.5rem;
                }

                .q-body {
                    color: #475569;
                    line-height: 1.5;
                }

                .q-actions {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .q-answer {
                    display: none;
                    margin-top: 1rem;
                    padding: 1rem;
                    background: #f8fafc;
                    border-left: 3px solid #059669;
                    border-radius: 0 8px 8px 0;
                    color: #334155;
                }

                .q-answer.open {
                    display: block;
                }

                @media (max-width: 768px) {
                    .q-toolbar {
                        flex-direction: column;
                        align-items: stretch;
                    }

                    .q-search {
                        flex: 1;
                        min-width: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
