// src/state.rs
// Form state, the reducer that drives it, and the two async flows (submit, copy)
// that talk to the outside world through `DeployApi` and `ClipboardWriter`.

use std::rc::Rc;

use yew::prelude::*;

use crate::api::DeployApi;
use crate::clipboard::ClipboardWriter;
use crate::config::{Variant, INVALID_URL_MESSAGE};
use crate::validate::{is_github_url, parse_github_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

/// At most one of `error` / `output_url` is non-empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub url: String,
    pub output_url: String,
    pub loading: bool,
    pub error: String,
    /// `owner/repo` of the in-flight deployment.
    pub deploying: Option<String>,
    pub copy: CopyStatus,
    pub copy_generation: u64,
}

impl FormState {
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Input(String),
    Rejected(String),
    Started(String),
    Succeeded(String),
    Failed(String),
    Copied(u64),
    CopyFailed,
    CopyExpired(u64),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input(url) => next.url = url,
            FormAction::Rejected(msg) => {
                next.output_url.clear();
                next.copy = CopyStatus::Idle;
                next.error = msg;
            }
            FormAction::Started(label) => {
                next.output_url.clear();
                next.error.clear();
                next.copy = CopyStatus::Idle;
                next.loading = true;
                next.deploying = Some(label);
            }
            FormAction::Succeeded(site_url) => {
                next.loading = false;
                next.deploying = None;
                next.error.clear();
                next.output_url = site_url;
            }
            FormAction::Failed(msg) => {
                next.loading = false;
                next.deploying = None;
                next.output_url.clear();
                next.error = msg;
            }
            FormAction::Copied(generation) => {
                next.copy = CopyStatus::Copied;
                next.copy_generation = generation;
            }
            FormAction::CopyFailed => next.copy = CopyStatus::Failed,
            FormAction::CopyExpired(generation) => {
                if next.copy == CopyStatus::Copied && next.copy_generation == generation {
                    next.copy = CopyStatus::Idle;
                } else {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Validates the current input and, if it is a GitHub URL, makes one deploy call.
pub async fn submit<A, D>(api: &A, state: &FormState, variant: Variant, dispatch: D)
where
    A: DeployApi,
    D: Fn(FormAction),
{
    if state.loading {
        log::debug!("submit ignored, a deployment is already in flight");
        return;
    }

    let url = state.url.clone();
    if !is_github_url(&url) {
        log::info!("rejected {url:?}: not a GitHub repository URL");
        dispatch(FormAction::Rejected(INVALID_URL_MESSAGE.to_string()));
        return;
    }

    let label = parse_github_url(&url)
        .map(|repo| repo.slug())
        .unwrap_or_else(|| url.clone());
    log::info!("deploying {label}");
    dispatch(FormAction::Started(label.clone()));

    match api.deploy(&url).await {
        Ok(site_url) => {
            log::info!("{label} deployed to {site_url}");
            dispatch(FormAction::Succeeded(site_url));
        }
        Err(e) => {
            log::warn!("deploying {label} failed: {e}");
            dispatch(FormAction::Failed(variant.failure_message().to_string()));
        }
    }
}

/// Copies the site URL, if any. Returns the generation of the "Copied" note to expire later.
pub async fn copy_output<C, D>(clipboard: &C, state: &FormState, dispatch: D) -> Option<u64>
where
    C: ClipboardWriter,
    D: Fn(FormAction),
{
    if state.output_url.is_empty() {
        return None;
    }

    match clipboard.write_text(&state.output_url).await {
        Ok(()) => {
            let generation = state.copy_generation.wrapping_add(1);
            dispatch(FormAction::Copied(generation));
            Some(generation)
        }
        Err(e) => {
            log::warn!("{e}");
            dispatch(FormAction::CopyFailed);
            None
        }
    }
}
