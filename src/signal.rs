//! Cooperative cancellation for the simulation loop.

use std::sync::{
    Arc, OnceLock,
    atomic::{ AtomicBool, Ordering },
};

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

static INTERRUPT: OnceLock<CancelToken> = OnceLock::new();
#[cfg(unix)]
static HANDLERS_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Token that fires on SIGINT or SIGTERM.
///
/// Handlers are installed on the first successful call; later calls hand
/// out clones of the same token. A failed install is retried next time.
#[cfg(unix)]
pub fn interrupt_token() -> std::io::Result<CancelToken> {
    let token = INTERRUPT.get_or_init(CancelToken::new).clone();
    if HANDLERS_INSTALLED.load(Ordering::SeqCst) {
        return Ok(token);
    }

    install(&[libc::SIGINT, libc::SIGTERM])?;
    HANDLERS_INSTALLED.store(true, Ordering::SeqCst);
    tracing::debug!("interrupt handlers installed");
    Ok(token)
}

#[cfg(unix)]
fn install(signals: &[libc::c_int]) -> std::io::Result<()> {
    let handler = on_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
    for &sig in signals {
        // SAFETY: the handler only performs an atomic store.
        let prev = unsafe { libc::signal(sig, handler) };
        if prev == libc::SIG_ERR {
            return Err(std::io::Error::last_os_error());
        }
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn interrupt_token() -> std::io::Result<CancelToken> {
    tracing::warn!("no interrupt handler on this platform, the process has to be killed");
    Ok(INTERRUPT.get_or_init(CancelToken::new).clone())
}

#[cfg(unix)]
extern "C" fn on_signal(_: libc::c_int) {
    if let Some(token) = INTERRUPT.get() {
        token.cancel();
    }
}
