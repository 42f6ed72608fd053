#![forbid(unsafe_code)]

//! Elm-style update loop with thread-backed effects.
//!
//! The model is single-threaded; side effects run on spawned threads and
//! deliver their result back as a message over a channel. The only
//! suspension points in this application are the CMS fetches and the
//! chat stream, so a plain `mpsc` channel and a pending-task counter are
//! all the scheduling this needs.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::time::Duration;

use tracing::debug;

/// Application state plus its transition function.
pub trait Model: Sized {
    type Message: Send + 'static;

    /// Startup commands, run once before the first event.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Plain-text rendering of the current state.
    fn view(&self) -> String;
}

/// Side effects returned from `init`/`update`.
pub enum Cmd<M> {
    None,
    Quit,
    /// Feed a message back through `update` on the next turn.
    Msg(M),
    Batch(Vec<Cmd<M>>),
    /// Run on a spawned thread; the produced message is delivered over
    /// the runtime channel.
    Task(Box<dyn FnOnce() -> M + Send + 'static>),
    /// Like `Task`, but the closure may emit any number of messages
    /// before finishing (chat chunks arrive this way).
    Stream(Box<dyn FnOnce(Sender<M>) + Send + 'static>),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    pub fn task(f: impl FnOnce() -> M + Send + 'static) -> Self {
        Self::Task(Box::new(f))
    }

    pub fn stream(f: impl FnOnce(Sender<M>) + Send + 'static) -> Self {
        Self::Stream(Box::new(f))
    }

    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Quit => f.write_str("Quit"),
            Self::Msg(_) => f.write_str("Msg(..)"),
            Self::Batch(cmds) => write!(f, "Batch(len={})", cmds.len()),
            Self::Task(_) => f.write_str("Task(..)"),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Drives a [`Model`]: queues messages, spawns effect threads, and
/// tracks whether any effect is still in flight.
pub struct Runtime<M: Model> {
    model: M,
    tx: Sender<M::Message>,
    rx: Receiver<M::Message>,
    in_flight: Arc<AtomicUsize>,
    running: bool,
}

impl<M: Model> Runtime<M> {
    pub fn new(model: M) -> Self {
        let (tx, rx) = channel();
        let mut runtime = Self {
            model,
            tx,
            rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
            running: true,
        };
        let cmd = runtime.model.init();
        runtime.dispatch(cmd);
        runtime
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed one message through `update` and execute the resulting
    /// command.
    pub fn deliver(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.dispatch(cmd);
    }

    /// Wait up to `timeout` for a message from an effect thread.
    pub fn poll(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.deliver(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                // All senders dropped; only possible after shutdown.
                self.running = false;
                false
            }
        }
    }

    /// Drain messages until no effect is in flight and the queue is
    /// empty. Test-oriented; the binary polls incrementally instead.
    pub fn run_until_idle(&mut self) {
        loop {
            let progressed = self.poll(Duration::from_millis(5));
            if !progressed && self.in_flight.load(Ordering::SeqCst) == 0 {
                match self.rx.try_recv() {
                    Ok(msg) => self.deliver(msg),
                    Err(_) => break,
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            Cmd::Msg(msg) => self.deliver(msg),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.dispatch(cmd);
                }
            }
            Cmd::Task(f) => {
                let tx = self.tx.clone();
                let in_flight = Arc::clone(&self.in_flight);
                in_flight.fetch_add(1, Ordering::SeqCst);
                std::thread::spawn(move || {
                    let msg = f();
                    // The receiver outlives every effect unless the
                    // program already quit; a failed send is fine then.
                    let _ = tx.send(msg);
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                });
            }
            Cmd::Stream(f) => {
                let tx = self.tx.clone();
                let in_flight = Arc::clone(&self.in_flight);
                in_flight.fetch_add(1, Ordering::SeqCst);
                std::thread::spawn(move || {
                    f(tx);
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: i32,
    }

    enum Msg {
        Add(i32),
        FetchDouble,
        Quit,
    }

    impl Model for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Add(n) => {
                    self.count += n;
                    Cmd::none()
                }
                Msg::FetchDouble => {
                    let current = self.count;
                    Cmd::task(move || Msg::Add(current))
                }
                Msg::Quit => Cmd::quit(),
            }
        }

        fn view(&self) -> String {
            self.count.to_string()
        }
    }

    #[test]
    fn messages_update_the_model() {
        let mut rt = Runtime::new(Counter { count: 0 });
        rt.deliver(Msg::Add(3));
        assert_eq!(rt.model().view(), "3");
    }

    #[test]
    fn tasks_deliver_back_over_the_channel() {
        let mut rt = Runtime::new(Counter { count: 2 });
        rt.deliver(Msg::FetchDouble);
        rt.run_until_idle();
        assert_eq!(rt.model().count, 4);
    }

    #[test]
    fn quit_stops_the_runtime() {
        let mut rt = Runtime::new(Counter { count: 0 });
        assert!(rt.is_running());
        rt.deliver(Msg::Quit);
        assert!(!rt.is_running());
    }

    #[test]
    fn batch_skips_none() {
        let cmd: Cmd<Msg> = Cmd::batch(vec![Cmd::none(), Cmd::msg(Msg::Add(1)), Cmd::none()]);
        assert!(matches!(cmd, Cmd::Msg(_)));
    }
}
