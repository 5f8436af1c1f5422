// src/app.rs
use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::HttpDeployApi;
use crate::clipboard::BrowserClipboard;
use crate::config::{Config, Variant};
use crate::state::{copy_output, submit, CopyStatus, FormAction, FormState};

const ESSENTIAL_POINTS: [&str; 4] = [
    "The repository must be public.",
    "package.json needs a \"build\" script that produces a static site.",
    "The build output should land in dist/ or build/.",
    "Paste the HTTPS clone URL, e.g. https://github.com/owner/repo.git",
];

/// Dispatch that goes quiet once the form is unmounted.
fn guarded_dispatch(
    dispatcher: UseReducerDispatcher<FormState>,
    mounted: Rc<RefCell<bool>>,
) -> impl Fn(FormAction) + Clone + 'static {
    move |action: FormAction| {
        if *mounted.borrow() {
            dispatcher.dispatch(action);
        } else {
            log::debug!("form unmounted, dropping {action:?}");
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(Config::from_build_env);
    let state = use_reducer(FormState::default);
    let mounted = use_mut_ref(|| true);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            move || *mounted.borrow_mut() = false
        });
    }

    let variant = config.variant;

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Input(input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let mounted = mounted.clone();
        let endpoint = config.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*state).clone();
            let dispatch = guarded_dispatch(state.dispatcher(), mounted.clone());
            let api = HttpDeployApi::new(endpoint.clone());
            spawn_local(async move {
                submit(&api, &snapshot, variant, dispatch).await;
            });
        })
    };

    let on_copy = {
        let state = state.clone();
        let mounted = mounted.clone();
        Callback::from(move |_: MouseEvent| {
            let snapshot = (*state).clone();
            let dispatch = guarded_dispatch(state.dispatcher(), mounted.clone());
            spawn_local(async move {
                let Some(generation) =
                    copy_output(&BrowserClipboard, &snapshot, dispatch.clone()).await
                else {
                    return;
                };
                if let Some(delay) = variant.copied_ack_delay() {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || dispatch(FormAction::CopyExpired(generation)))
                        .forget();
                }
            });
        })
    };

    let button_label = if state.loading { "Deploying..." } else { "Deploy" };

    html! {
        <main class="wrap">
            <div class="card">
                <h1 class="h1">{ "Deploy Your GitHub Project" }</h1>

                if variant == Variant::Guided {
                    <EssentialPoints />
                }

                <form class="form" onsubmit={on_submit}>
                    <input
                        type="url"
                        placeholder="Enter a valid GitHub URL"
                        value={state.url.clone()}
                        oninput={on_input}
                        required=true
                    />
                    <button
                        type="submit"
                        class={classes!("btn", state.loading.then_some("btn-busy"))}
                        disabled={!state.can_submit()}
                    >
                        { button_label }
                    </button>
                </form>

                if let Some(label) = state.deploying.clone() {
                    <p class="status">{ format!("Deploying {label}...") }</p>
                }

                if !state.error.is_empty() {
                    <p class="error">{ state.error.clone() }</p>
                }

                if !state.output_url.is_empty() {
                    <ResultPanel
                        output_url={state.output_url.clone()}
                        copy={state.copy}
                        variant={variant}
                        on_copy={on_copy}
                    />
                }
            </div>
        </main>
    }
}

#[function_component(EssentialPoints)]
fn essential_points() -> Html {
    html! {
        <section class="points">
            <h2 class="h2">{ "Essential points" }</h2>
            <ul>
                { for ESSENTIAL_POINTS.iter().map(|p| html! { <li>{ *p }</li> }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ResultPanelProps {
    output_url: AttrValue,
    copy: CopyStatus,
    variant: Variant,
    on_copy: Callback<MouseEvent>,
}

#[function_component(ResultPanel)]
fn result_panel(props: &ResultPanelProps) -> Html {
    let copy_failed = props.copy == CopyStatus::Failed;

    html! {
        <div class="result">
            <p class="result-title">{ "Deployed successfully! Copy the URL below:" }</p>
            {
                match props.variant {
                    Variant::Classic => html! {
                        <>
                            <input type="text" readonly=true value={props.output_url.clone()} />
                            <button class="btn btn-copy" onclick={props.on_copy.clone()}>
                                { "Copy URL" }
                            </button>
                        </>
                    },
                    Variant::Guided => html! {
                        <div class="row">
                            <input type="text" readonly=true value={props.output_url.clone()} />
                            <button
                                class="icon-btn"
                                title="Copy URL"
                                aria-label="Copy URL"
                                onclick={props.on_copy.clone()}
                            >
                                { "📋" }
                            </button>
                        </div>
                    },
                }
            }
            if props.variant == Variant::Guided && props.copy == CopyStatus::Copied {
                <p class="copied">{ "Copied" }</p>
            }
            if copy_failed {
                <p class="error">{ "Copy failed (clipboard permission?)" }</p>
            }
        </div>
    }
}
