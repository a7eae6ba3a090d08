#![cfg(feature = "tracing")]

use multi_err_tree::MultiError;
use thiserror::Error;
use tracing_error::{ErrorLayer, SpanTraceStatus};
use tracing_subscriber::{layer::SubscriberExt, Registry};

#[derive(Debug, Error)]
#[error("{0}")]
struct Leaf(&'static str);

#[tracing::instrument]
fn close_all(names: &[&'static str]) -> MultiError {
    names.iter().copied().map(Leaf).collect()
}

#[test]
fn captures_spans() {
    let subscriber = Registry::default().with(ErrorLayer::default());

    tracing::subscriber::with_default(subscriber, || {
        let errs = close_all(&["db", "socket"]);
        assert_eq!(errs.span_trace().status(), SpanTraceStatus::CAPTURED);

        let mut spans = Vec::new();
        errs.span_trace().with_spans(|metadata, _| {
            spans.push(metadata.name());
            true
        });
        assert_eq!(spans, ["close_all"]);

        // The tree text does not change with tracing enabled.
        assert_eq!(
            errs.to_string(),
            "2 error(s) occurred:\n├── db\n└── socket\n"
        );
    });
}

#[test]
fn no_subscriber() {
    let errs = MultiError::new([Some(Leaf("1"))]);
    assert_ne!(errs.span_trace().status(), SpanTraceStatus::CAPTURED);
}
