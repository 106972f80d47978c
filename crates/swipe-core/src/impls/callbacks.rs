//! Callbacks - クロージャ 2 つを DecisionSink として使う

use crate::ports::{DecisionSink, SinkError};

/// `onLike` / `onPass` style handlers.
///
/// ```ignore
/// let sink = Callbacks::new(
///     |item: &ProductItem| { println!("liked {}", item.display_name()); Ok(()) },
///     |item: &ProductItem| { println!("passed {}", item.display_name()); Ok(()) },
/// );
/// ```
pub struct Callbacks<A, R> {
    on_accept: A,
    on_reject: R,
}

impl<A, R> Callbacks<A, R> {
    pub fn new(on_accept: A, on_reject: R) -> Self {
        Self {
            on_accept,
            on_reject,
        }
    }
}

impl<T, A, R> DecisionSink<T> for Callbacks<A, R>
where
    A: FnMut(&T) -> Result<(), SinkError>,
    R: FnMut(&T) -> Result<(), SinkError>,
{
    fn on_accept(&mut self, item: &T) -> Result<(), SinkError> {
        (self.on_accept)(item)
    }

    fn on_reject(&mut self, item: &T) -> Result<(), SinkError> {
        (self.on_reject)(item)
    }
}
