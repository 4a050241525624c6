use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::highlight::highlight;
use crate::shared::i18n::Translator;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long the "copied" feedback stays visible, in milliseconds.
const COPIED_RESET_MS: u32 = 2000;

/// Feedback window for the copy button.
///
/// Every successful copy takes a fresh generation token; `confirm` and
/// `revert` calls carrying a stale token are ignored. A second copy therefore
/// restarts the feedback window instead of letting the first revert timer cut
/// it short. Failed copies take no token, so the pending revert stays valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    copied: bool,
    generation: u64,
}

impl CopyIndicator {
    /// Starts a copy attempt and returns its token.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Shows the feedback, unless a newer attempt has started since.
    pub fn confirm(&mut self, token: u64) {
        if token == self.generation {
            self.copied = true;
        }
    }

    /// Hides the feedback, unless a newer attempt has started since.
    pub fn revert(&mut self, token: u64) {
        if token == self.generation {
            self.copied = false;
        }
    }

    pub fn copied(&self) -> bool {
        self.copied
    }
}

/// Read-only, syntax-highlighted display of a code snippet with an optional
/// copy-to-clipboard action.
#[component]
pub fn CodeBlock(
    /// Snippet text, copied verbatim
    #[prop(into)]
    code: Signal<String>,
    /// Highlighter hint
    #[prop(into)]
    language: Signal<String>,
    /// Heading above the snippet (optional)
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Hide the copy button when false
    #[prop(default = true)]
    show_copy_button: bool,
    translator: Translator,
) -> impl IntoView {
    let indicator = RwSignal::new(CopyIndicator::default());

    let handle_copy = move |_| {
        let text = code.get_untracked();
        copy_to_clipboard(&text, move |ok| {
            if !ok {
                // recovered locally: the indicator simply does not flip
                log::warn!("clipboard write failed");
                return;
            }
            // the token is taken only here, so a failed copy cannot
            // invalidate an open window's pending revert
            let token = indicator.try_update(|i| i.begin()).unwrap_or_default();
            indicator.update(|i| i.confirm(token));
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(COPIED_RESET_MS).await;
                indicator.update(|i| i.revert(token));
            });
        });
    };

    view! {
        <div class="code-block">
            <div class="code-block__header">
                {move || title.get().map(|t| view! { <span class="code-block__title">{t}</span> })}
                {show_copy_button
                    .then(|| {
                        view! {
                            <button class="button button--ghost code-block__copy" on:click=handle_copy>
                                {move || {
                                    if indicator.get().copied() {
                                        translator.t("code.copied")
                                    } else {
                                        translator.t("code.copy")
                                    }
                                }}
                            </button>
                        }
                    })}
            </div>
            <pre class="code-block__body">
                <code inner_html=move || highlight(&language.get(), &code.get())></code>
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_window_restarts_instead_of_stacking() {
        let mut indicator = CopyIndicator::default();

        // t=0: copy succeeds
        let first = indicator.begin();
        indicator.confirm(first);
        assert!(indicator.copied());

        // t=1000: second copy while the window is open
        let second = indicator.begin();
        indicator.confirm(second);
        assert!(indicator.copied());

        // t=2000: the first revert timer fires with a stale token
        indicator.revert(first);
        assert!(indicator.copied(), "stale revert must not cut the window short");

        // t=3000: the second revert timer fires
        indicator.revert(second);
        assert!(!indicator.copied());
    }

    #[test]
    fn test_failed_copy_cannot_strand_an_open_window() {
        let mut indicator = CopyIndicator::default();

        // t=0: copy succeeds
        let first = indicator.begin();
        indicator.confirm(first);
        assert!(indicator.copied());

        // t=1000: second copy fails, no token is taken

        // t=2000: the first revert timer must still close the window
        indicator.revert(first);
        assert!(!indicator.copied(), "window stranded open after a failed copy");
    }

    #[test]
    fn test_stale_confirm_is_ignored() {
        let mut indicator = CopyIndicator::default();
        let first = indicator.begin();
        let _second = indicator.begin();
        indicator.confirm(first);
        assert!(!indicator.copied());
    }
}
