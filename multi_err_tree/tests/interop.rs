#![cfg(any(feature = "anyhow", feature = "eyre"))]

use multi_err_tree::{ErrNode, MultiError};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
struct Leaf(&'static str);

#[cfg(feature = "anyhow")]
mod anyhow_interop {
    use super::*;

    #[test]
    fn aggregate_round_trip() {
        let err: anyhow::Error = MultiError::new([Some(Leaf("1")), Some(Leaf("2"))]).into();
        match ErrNode::from_anyhow(err) {
            ErrNode::Aggregate(multi) => assert_eq!(multi.len(), 2),
            ErrNode::Leaf(leaf) => panic!("expected aggregate, found leaf {leaf}"),
        }
    }

    #[test]
    fn leaf() {
        let node = ErrNode::from_anyhow(anyhow::anyhow!("plain"));
        assert!(!node.is_aggregate());

        let errs = MultiError::new([Some(node)]);
        assert_eq!(errs.to_string(), "1 error(s) occurred:\n└── plain\n");
    }

    #[test]
    fn question_mark() {
        fn fails() -> anyhow::Result<()> {
            MultiError::new([Some(Leaf("1"))]).into_result()?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert_eq!(err.downcast_ref::<MultiError>().map(MultiError::len), Some(1));
    }
}

#[cfg(feature = "eyre")]
mod eyre_interop {
    use super::*;

    #[test]
    fn aggregate_round_trip() {
        let err: eyre::Report = MultiError::new([Some(Leaf("1"))]).into();
        assert!(ErrNode::from_eyre(err).is_aggregate());
    }

    #[test]
    fn leaf() {
        let node = ErrNode::from_eyre(eyre::eyre!("plain"));
        assert_eq!(node.to_string(), "plain");
        assert!(!node.is_aggregate());
    }
}
