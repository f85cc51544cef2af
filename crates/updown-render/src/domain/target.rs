use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Somewhere rendered text ends up. Owned by the caller; fetches only write.
///
/// Writes replace the previous content. Implementations synchronise
/// internally, so a target can be shared between concurrent fetches
/// (last write wins).
pub trait DisplayTarget: Send + Sync {
    fn render(&self, text: &str);
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for Arc<T> {
    fn render(&self, text: &str) {
        (**self).render(text)
    }
}

impl<T: DisplayTarget + ?Sized> DisplayTarget for &T {
    fn render(&self, text: &str) {
        (**self).render(text)
    }
}

/// Shared in-memory text slot. Clones point at the same content.
#[derive(Clone, Default, Debug)]
pub struct TextCell {
    content: Arc<Mutex<String>>,
}

impl TextCell {
    pub fn new(initial: &str) -> Self {
        Self {
            content: Arc::new(Mutex::new(initial.to_owned())),
        }
    }

    pub fn get(&self) -> String {
        match self.content.lock() {
            Ok(content) => content.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DisplayTarget for TextCell {
    fn render(&self, text: &str) {
        let mut content = match self.content.lock() {
            Ok(content) => content,
            Err(poisoned) => poisoned.into_inner(),
        };
        *content = text.to_owned();
    }
}

/// Writes each render as one line to `W` and flushes it.
///
/// `render` cannot fail, so the first I/O error is kept and later renders are
/// skipped; call [`WriterTarget::check`] once the fetch is done.
pub struct WriterTarget<W> {
    state: Mutex<WriterState<W>>,
}

struct WriterState<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterTarget<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(WriterState { out, error: None }),
        }
    }

    /// Return (and clear) the error from a failed write, if any.
    pub fn check(&self) -> io::Result<()> {
        match self.lock().error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }

    fn lock(&self) -> MutexGuard<'_, WriterState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterTarget<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> DisplayTarget for WriterTarget<W> {
    fn render(&self, text: &str) {
        let mut guard = self.lock();
        let state = &mut *guard;
        if state.error.is_some() {
            return;
        }
        let written = writeln!(state.out, "{text}").and_then(|()| state.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write rendered text");
            state.error = Some(e);
        }
    }
}
