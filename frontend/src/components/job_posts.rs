use std::collections::BTreeSet;
use yew::prelude::*;

pub struct JobPost {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub const JOB_POSTS: &[JobPost] = &[
    JobPost {
        title: "Electrical engineer",
        summary: "Plan and supervise photovoltaic installations from survey to grid connection.",
        details: "You hold a degree in electrical engineering, know the local grid codes and enjoy time on site. Driving licence required.",
    },
    JobPost {
        title: "Installation technician",
        summary: "Mount panels, inverters and storage systems with our field crews.",
        details: "Experience with low-voltage installations is a plus. We provide training, tools and a company vehicle.",
    },
    JobPost {
        title: "Sales representative",
        summary: "Help households and businesses size the right system for their needs.",
        details: "You are comfortable explaining technical trade-offs in plain words and like meeting people.",
    },
];

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "Read less"
    } else {
        "Read more"
    }
}

#[derive(Properties, PartialEq)]
pub struct JobPostsProps {
    pub expanded: BTreeSet<usize>,
    pub on_toggle: Callback<usize>,
}

#[function_component(JobPosts)]
pub fn job_posts(props: &JobPostsProps) -> Html {
    html! {
        <section id="careers" class="m-job-posts">
            <h2>{"Careers"}</h2>
            { for JOB_POSTS.iter().enumerate().map(|(index, post)| {
                let expanded = props.expanded.contains(&index);
                let on_toggle = props.on_toggle.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_toggle.emit(index);
                });
                html! {
                    <article class="m-job-posts_item">
                        <h3>{ post.title }</h3>
                        <p>{ post.summary }</p>
                        <p class={classes!("m-job-posts_hidden-text", expanded.then(|| "is-visible"))}>
                            { post.details }
                        </p>
                        <a href="#" class="js-job-post-hidden-toggle" {onclick}>
                            { toggle_label(expanded) }
                        </a>
                    </article>
                }
            }) }
        </section>
    }
}
