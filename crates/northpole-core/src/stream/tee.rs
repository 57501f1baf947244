//! Buffered fan-out of one stream into two independent readers.
//!
//! [`tee`] returns a pass-through [`TeeStream`] for the primary consumer and
//! a [`Replay`] that receives a clone of every item the primary consumer
//! pulled. The replay side is backed by an unbounded channel, so a slow or
//! absent replay reader never blocks the primary side. The primary side
//! drives the upstream; the replay sees items only as they are pulled.
//!
//! The replay terminates when the upstream ends or when the `TeeStream` is
//! dropped, whichever happens first.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use pin_project_lite::pin_project;
use tokio::sync::mpsc;

pin_project! {
    /// Pass-through side of a [`tee`].
    pub struct TeeStream<S, T> {
        #[pin]
        inner: S,
        tx: Option<mpsc::UnboundedSender<T>>,
    }
}

/// Replay side of a [`tee`].
pub struct Replay<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

/// Split `stream` into a pass-through stream and a buffered replay.
pub fn tee<S>(stream: S) -> (TeeStream<S, S::Item>, Replay<S::Item>)
where
    S: Stream,
    S::Item: Clone,
{
    let (tx, rx) = mpsc::unbounded_channel();
    (
        TeeStream {
            inner: stream,
            tx: Some(tx),
        },
        Replay { rx },
    )
}

impl<S, T> Stream for TeeStream<S, T>
where
    S: Stream<Item = T>,
    T: Clone,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.project();
        match this.inner.poll_next(cx) {
            Poll::Ready(Some(item)) => {
                // A closed receiver only means nobody replays anymore.
                let closed = this
                    .tx
                    .as_ref()
                    .is_some_and(|tx| tx.send(item.clone()).is_err());
                if closed {
                    *this.tx = None;
                }
                Poll::Ready(Some(item))
            }
            Poll::Ready(None) => {
                *this.tx = None;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> Replay<T> {
    /// Wait for the next replayed item. `None` once the tee is finished.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

impl<T> Stream for Replay<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}
