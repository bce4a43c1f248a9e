//! Exit handling: signal handlers and terminal restoration.

/// Put the tty back into cooked mode with echo, whatever state we left it in.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on every normal exit, including `process::exit`.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Escape codes only when stdout is a TTY, never into a pipe or file
    unsafe {
        if libc::isatty(1) == 1 {
            const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(1, SHOW_CURSOR.as_ptr() as *const libc::c_void, SHOW_CURSOR.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so the atexit hook restores the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    let handler = signal_handler as *const () as libc::sighandler_t;
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, handler);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

/// Reset terminal state before drawing anything.
pub fn reset_terminal() {
    restore_termios();
}
