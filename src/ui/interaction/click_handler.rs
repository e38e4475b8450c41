//! Click action handler for the mouse interaction system.
//!
//! This module processes click actions dispatched from the hit area registry,
//! translating them into App state mutations.

use super::hit_area::ClickAction;
use crate::app::{App, Focus};
use crate::state::DraftField;

/// Handle a click action by updating App state.
///
/// Called from the event loop when a left click lands on a registered
/// hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    // Mark the app as dirty since any click action likely changes state
    app.mark_dirty();

    // While the answer dialog is open only its own controls respond
    if app.assistant.is_dialog_open()
        && !matches!(action, ClickAction::CloseAnswer | ClickAction::OpenReference(_))
    {
        tracing::debug!("Click: {:?} ignored behind dialog", action);
        return;
    }

    match action {
        // =====================================================================
        // Header and sidebar
        // =====================================================================
        ClickAction::Navigate(page) => {
            let changed = app.navigate(page);
            tracing::debug!("Click: Navigate({}) changed={}", page, changed);
        }
        ClickAction::FocusSearch => {
            app.set_focus(Focus::Search);
            tracing::debug!("Click: FocusSearch");
        }
        ClickAction::SignIn => {
            app.sign_in();
        }

        // =====================================================================
        // Assistant panel
        // =====================================================================
        ClickAction::FocusAssistant => {
            app.set_focus(Focus::Assistant);
            tracing::debug!("Click: FocusAssistant");
        }
        ClickAction::SubmitAssistant => {
            app.set_focus(Focus::Assistant);
            let submitted = app.submit_assistant();
            tracing::debug!("Click: SubmitAssistant submitted={}", submitted);
        }
        ClickAction::OpenAnswer => {
            app.open_answer();
            tracing::debug!("Click: OpenAnswer");
        }
        ClickAction::CloseAnswer => {
            app.assistant.close_dialog();
            tracing::debug!("Click: CloseAnswer");
        }
        ClickAction::OpenReference(slug) => {
            // References have no target page
            tracing::debug!("Click: OpenReference({})", slug);
        }

        // =====================================================================
        // Post cards
        // =====================================================================
        ClickAction::SelectPost(post) => {
            app.page_mut().select(post);
            app.set_focus(Focus::Posts);
        }
        ClickAction::Vote { post, direction } => {
            app.vote(post, direction);
            app.set_focus(Focus::Posts);
            tracing::debug!("Click: Vote(post={}, {:?})", post, direction);
        }
        ClickAction::ToggleComments(post) => {
            app.toggle_comments(post);
            app.set_focus(Focus::Posts);
            tracing::debug!("Click: ToggleComments(post={})", post);
        }
        ClickAction::FocusComment(post) => {
            app.focus_comment(post);
        }
        ClickAction::SubmitComment(post) => {
            let added = app.submit_comment(post);
            tracing::debug!("Click: SubmitComment(post={}) added={}", post, added);
        }

        // =====================================================================
        // New Post form
        // =====================================================================
        ClickAction::FocusDraft(field) => {
            app.set_focus(match field {
                DraftField::Title => Focus::NewPostTitle,
                DraftField::Content => Focus::NewPostContent,
            });
        }
        ClickAction::SubmitDraft => {
            app.submit_draft();
            tracing::debug!("Click: SubmitDraft");
        }
    }
}
