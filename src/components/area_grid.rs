use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::model::{Area, AreaFilter};

const AREA_CARDS: &[(Area, &str)] = &[
    (Area::Sistemas, "Desarrollo de software, redes y soporte técnico para tus proyectos."),
    (Area::Contabilidad, "Registros contables, estados financieros y normativa básica."),
    (Area::Administracion, "Gestión de procesos, talento humano y planes de trabajo."),
    (Area::Finanzas, "Presupuestos, evaluación de proyectos e inversión."),
];

/// Grid of study-area cards with a category selector. Filtering only hides
/// cards; every card stays mounted.
#[function_component(AreaGrid)]
pub fn area_grid() -> Html {
    let filter = use_state(AreaFilter::default);

    let onchange = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(AreaFilter::from_value(&select.value()));
        })
    };

    html! {
        <div class="areas-panel">
            <div class="areas-toolbar">
                <label for="areas-select">{"Filtrar por área"}</label>
                <select id="areas-select" {onchange}>
                    <option value="all" selected=true>{"Todas las áreas"}</option>
                    {
                        for Area::ALL.iter().map(|area| html! {
                            <option value={area.tag()}>{area.label()}</option>
                        })
                    }
                </select>
            </div>
            <div class="areas-grid">
                {
                    for AREA_CARDS.iter().map(|(area, desc)| {
                        let hidden = !filter.matches(*area);
                        html! {
                            <article
                                class="area-card"
                                data-area={area.tag()}
                                style={hidden.then(|| "display: none;")}
                            >
                                <h3>{area.label()}</h3>
                                <p>{*desc}</p>
                            </article>
                        }
                    })
                }
            </div>
            <style>
                {r#"
                .areas-panel {
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .areas-toolbar {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .areas-toolbar label {
                    color: #475569;
                    font-size: 0.95rem;
                }

                .areas-toolbar select {
                    padding: 0.5rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    background: #fff;
                    color: #0f172a;
                    cursor: pointer;
                }

                .areas-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 1.25rem;
                }

                .area-card {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 1.5rem;
                    transition: all 0.3s ease;
                }

                .area-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 10px 24px rgba(15, 23, 42, 0.08);
                }

                .area-card h3 {
                    margin-bottom: 0.5rem;
                    color: #0f172a;
                }

                .area-card p {
                    color: #64748b;
                    line-height: 1.5;
                }

                @media (max-width: 768px) {
                    .areas-toolbar {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </div>
    }
}
