//! Assistant panel state.
//!
//! The assistant never looks at the question. Submitting a non-empty query
//! clears the field, raises the loading flag and starts a timer task; when
//! the timer fires it posts [`AppMessage::AssistantReplied`] back to the
//! event loop, which calls [`AssistantPanel::complete`] to fill the answer
//! slot with the canned [`AssistantAnswer`].
//!
//! The timer task is owned by the panel. [`AssistantPanel::teardown`]
//! (also run on drop) aborts it, and completions for unknown request ids
//! are ignored, so a reply can never land on a panel that is gone.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::app::AppMessage;
use crate::models::{assistant_answer, AssistantAnswer};

/// Default delay before the canned answer appears.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(2000);

/// Observable state of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantPhase {
    /// Nothing asked yet
    Idle,
    /// Waiting for the timer; submit is disabled
    Pending,
    /// An answer is on display
    Answered,
}

#[derive(Debug)]
struct PendingReply {
    request_id: u64,
    timer: Option<JoinHandle<()>>,
}

#[derive(Debug)]
pub struct AssistantPanel {
    query: String,
    answer: Option<AssistantAnswer>,
    pending: Option<PendingReply>,
    dialog_open: bool,
    next_request_id: u64,
    reply_delay: Duration,
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl AssistantPanel {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            query: String::new(),
            answer: None,
            pending: None,
            dialog_open: false,
            next_request_id: 1,
            reply_delay,
        }
    }

    pub fn phase(&self) -> AssistantPhase {
        if self.pending.is_some() {
            AssistantPhase::Pending
        } else if self.answer.is_some() {
            AssistantPhase::Answered
        } else {
            AssistantPhase::Idle
        }
    }

    /// Loading indicator; also means the submit control is inert.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn answer(&self) -> Option<&AssistantAnswer> {
        self.answer.as_ref()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Request id of the outstanding reply, if any.
    pub fn pending_request(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.request_id)
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn push_query_str(&mut self, text: &str) {
        self.query
            .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// State half of a submit: move to `Pending` without starting a timer.
    ///
    /// Returns the new request id, or `None` when the query is blank or a
    /// request is already outstanding.
    pub fn begin_request(&mut self) -> Option<u64> {
        if self.pending.is_some() || self.query.trim().is_empty() {
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        tracing::info!(
            "Assistant request {} submitted ({} chars)",
            request_id,
            self.query.chars().count()
        );
        self.query.clear();
        self.pending = Some(PendingReply {
            request_id,
            timer: None,
        });
        Some(request_id)
    }

    /// Submit the current query and start the reply timer.
    ///
    /// Must be called from within a tokio runtime. Returns `false` when the
    /// submit was ignored (blank query or a request already pending).
    pub fn submit(&mut self, message_tx: &mpsc::UnboundedSender<AppMessage>) -> bool {
        let Some(request_id) = self.begin_request() else {
            return false;
        };

        let timer = spawn_reply_timer(request_id, self.reply_delay, message_tx.clone());
        if let Some(pending) = self.pending.as_mut() {
            pending.timer = Some(timer);
        }
        true
    }

    /// Timer half: fill the answer slot for `request_id`.
    ///
    /// Stale or unknown ids are ignored. Returns whether the answer was set.
    pub fn complete(&mut self, request_id: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.request_id == request_id => {}
            _ => {
                tracing::debug!("Ignoring stale assistant reply {}", request_id);
                return false;
            }
        }

        self.pending = None;
        self.answer = Some(assistant_answer());
        tracing::info!("Assistant request {} answered", request_id);
        true
    }

    /// Expand the answer card into a dialog. No-op without an answer.
    pub fn open_dialog(&mut self) -> bool {
        if self.answer.is_some() {
            self.dialog_open = true;
        }
        self.dialog_open
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open && self.answer.is_some()
    }

    /// Cancel the outstanding timer, if any. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            if let Some(timer) = pending.timer {
                timer.abort();
            }
            tracing::debug!("Assistant request {} cancelled at teardown", pending.request_id);
        }
    }
}

impl Drop for AssistantPanel {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Fire-and-forget timer that reports back through the app channel.
///
/// The deadline is fixed at submit time, not when the task is first
/// polled. A closed channel means the app is gone; the send error is dropped.
fn spawn_reply_timer(
    request_id: u64,
    delay: Duration,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    let deadline = Instant::now() + delay;
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        let _ = message_tx.send(AppMessage::AssistantReplied { request_id });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let panel = AssistantPanel::default();
        assert_eq!(panel.phase(), AssistantPhase::Idle);
        assert!(!panel.is_loading());
        assert!(panel.answer().is_none());
        assert_eq!(panel.reply_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_begin_request_clears_query() {
        let mut panel = AssistantPanel::default();
        panel.set_query("How to reduce costs?");
        let id = panel.begin_request();
        assert_eq!(id, Some(1));
        assert_eq!(panel.phase(), AssistantPhase::Pending);
        assert_eq!(panel.query(), "");
        assert!(panel.is_loading());
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut panel = AssistantPanel::default();
        panel.set_query("   ");
        assert_eq!(panel.begin_request(), None);
        assert_eq!(panel.phase(), AssistantPhase::Idle);
        assert_eq!(panel.query(), "   ");
    }

    #[test]
    fn test_submit_while_pending_is_inert() {
        let mut panel = AssistantPanel::default();
        panel.set_query("first");
        let first = panel.begin_request().unwrap();
        panel.set_query("second");
        assert_eq!(panel.begin_request(), None);
        // Query stays because nothing was submitted
        assert_eq!(panel.query(), "second");
        assert_eq!(panel.pending_request(), Some(first));
    }

    #[test]
    fn test_complete_sets_fixed_answer() {
        let mut panel = AssistantPanel::default();
        panel.set_query("anything at all");
        let id = panel.begin_request().unwrap();
        assert!(panel.complete(id));
        assert_eq!(panel.phase(), AssistantPhase::Answered);
        assert_eq!(panel.answer(), Some(&assistant_answer()));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut panel = AssistantPanel::default();
        assert!(!panel.complete(1));
        panel.set_query("q");
        let id = panel.begin_request().unwrap();
        assert!(!panel.complete(id + 1));
        assert_eq!(panel.phase(), AssistantPhase::Pending);
    }

    #[test]
    fn test_answer_kept_while_next_request_pending() {
        let mut panel = AssistantPanel::default();
        panel.set_query("one");
        let first = panel.begin_request().unwrap();
        panel.complete(first);
        panel.set_query("two");
        let second = panel.begin_request().unwrap();
        assert_ne!(first, second);
        assert_eq!(panel.phase(), AssistantPhase::Pending);
        assert!(panel.answer().is_some());
        assert!(panel.complete(second));
        assert_eq!(panel.phase(), AssistantPhase::Answered);
    }

    #[test]
    fn test_teardown_then_completion_is_noop() {
        let mut panel = AssistantPanel::default();
        panel.set_query("q");
        let id = panel.begin_request().unwrap();
        panel.teardown();
        assert!(!panel.complete(id));
        assert!(panel.answer().is_none());
        panel.teardown();
    }

    #[test]
    fn test_dialog_requires_answer() {
        let mut panel = AssistantPanel::default();
        assert!(!panel.open_dialog());
        assert!(!panel.is_dialog_open());
        panel.set_query("q");
        let id = panel.begin_request().unwrap();
        panel.complete(id);
        assert!(panel.open_dialog());
        assert!(panel.is_dialog_open());
        panel.close_dialog();
        assert!(!panel.is_dialog_open());
    }

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_posts_reply_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut panel = AssistantPanel::new(Duration::from_millis(2000));
        panel.set_query("How to reduce costs?");
        assert!(panel.submit(&tx));

        // Let the timer task start sleeping before the clock moves
        settle().await;
        tokio::time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        match rx.try_recv() {
            Ok(AppMessage::AssistantReplied { request_id }) => {
                assert!(panel.complete(request_id));
            }
            other => panic!("reply not delivered 2000ms after submit: {:?}", other),
        }
        assert_eq!(panel.answer().unwrap().title, "Shipping Best Practices");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_deadline_is_fixed_at_submit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut panel = AssistantPanel::new(Duration::from_millis(2000));
        panel.set_query("q");
        assert!(panel.submit(&tx));

        // The task is not polled until after the full delay has passed
        tokio::time::advance(Duration::from_millis(2000)).await;
        settle().await;
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessage::AssistantReplied { request_id: 1 })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut panel = AssistantPanel::default();
            panel.set_query("q");
            assert!(panel.submit(&tx));
        }
        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
