use yew::prelude::*;

pub const SERVICES: &[(&str, &str)] = &[
    ("Solar installations", "Design and turnkey installation of rooftop and ground-mounted photovoltaic plants."),
    ("Energy storage", "Battery systems sized to your consumption profile, with remote monitoring."),
    ("EV charging", "Home and fleet charging points, load balancing included."),
    ("Maintenance", "Preventive inspections, cleaning and fault response for existing plants."),
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub active: Option<usize>,
    pub on_hover: Callback<usize>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="m-services">
            <h2>{"What we do"}</h2>
            <div class="js-m-services-box-wrapper m-services-box-wrapper">
                { for SERVICES.iter().enumerate().map(|(index, (title, text))| {
                    let on_hover = props.on_hover.clone();
                    let onmouseenter = Callback::from(move |_: MouseEvent| on_hover.emit(index));
                    html! {
                        <div
                            class={classes!(
                                "m-services-box",
                                (props.active == Some(index)).then(|| "m-services-box-is-active"),
                            )}
                            {onmouseenter}
                        >
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
