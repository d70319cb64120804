//! xvbox - vertical box for existing X11 windows
//!
//! Reparents top-level windows, given by window ID on the command line, into
//! a single vertically stacked container window, then idles on the X11 event
//! queue until killed.

mod cli;
mod layout;
mod window_query;

use std::env::VarError;

use anyhow::{bail, Context, Result};
use clap::Parser;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use cli::Cli;
use layout::{band_rect, CONTAINER_HEIGHT, CONTAINER_WIDTH};
use window_query::{format_window_id, manageability, Manageability};

/// The reparenting session: one X11 connection, one container window.
struct Vbox {
    conn: RustConnection,
    screen_num: usize,
    /// The container window that clients are stacked into.
    container: Window,
    /// Number of clients reparented so far; fixes the next band slot.
    clients: usize,
}

/// Open the display named by DISPLAY, falling back to the library's default
/// connection behavior when the variable is unset.
fn connect_display() -> Result<(RustConnection, usize)> {
    match std::env::var("DISPLAY") {
        Ok(display) => RustConnection::connect(Some(&display))
            .with_context(|| format!("failed X11 connection to '{}'", display)),
        Err(VarError::NotPresent) => RustConnection::connect(None)
            .context("X11 connection failed; DISPLAY environment variable not set?"),
        Err(VarError::NotUnicode(_)) => bail!("no display target configured"),
    }
}

impl Vbox {
    /// Connect to X11 and create the container window: 200x800 at the
    /// origin, black background, mapped and raised immediately.
    fn new() -> Result<Self> {
        let (conn, screen_num) = connect_display()?;

        let screen = &conn.setup().roots[screen_num];
        let root = screen.root;
        let black_pixel = screen.black_pixel;

        log::info!(
            "Connected to X11, screen {}, root window 0x{:x}",
            screen_num,
            root
        );

        let container = conn.generate_id()?;
        conn.create_window(
            x11rb::COPY_DEPTH_FROM_PARENT,
            container,
            root,
            0,
            0,
            CONTAINER_WIDTH,
            CONTAINER_HEIGHT,
            0, // border width
            WindowClass::INPUT_OUTPUT,
            x11rb::COPY_FROM_PARENT,
            &CreateWindowAux::new().background_pixel(black_pixel),
        )?;
        conn.change_property8(
            PropMode::REPLACE,
            container,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            b"vbox",
        )?;
        conn.map_window(container)?;
        conn.configure_window(
            container,
            &ConfigureWindowAux::new().stack_mode(StackMode::ABOVE),
        )?;
        conn.flush()?;

        log::info!("Created container window 0x{:x}", container);

        Ok(Self {
            conn,
            screen_num,
            container,
            clients: 0,
        })
    }

    /// Root window of the default screen
    fn root(&self) -> Window {
        self.conn.setup().roots[self.screen_num].root
    }

    fn query_root_children(&self) -> Result<QueryTreeReply> {
        Ok(self.conn.query_tree(self.root())?.reply()?)
    }

    /// Find the window matching the given ID among the root's immediate
    /// children and pull it into the container.
    ///
    /// A failed tree query is logged and skips this ID only; processing
    /// continues with the next argument.
    fn reparent(&mut self, wid: &str) -> Result<()> {
        let tree = match self.query_root_children() {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("did not capture {}: {}", wid, err);
                return Ok(());
            }
        };

        // No early exit after a match: if the server ever handed out
        // duplicate IDs, the last match would win.
        for &child in &tree.children {
            let manageable = manageability(&self.conn, child);
            if manageable == Manageability::NotManageable {
                continue;
            }

            let id = format_window_id(child);
            if id == wid {
                if manageable == Manageability::Mapped {
                    // Unmap first so the move is not visible as a flash
                    self.conn.unmap_window(child)?;
                    self.conn.sync()?;
                }
                self.reparent_window(child)?;
            } else {
                println!("Did not match {}", id);
            }
        }

        Ok(())
    }

    /// Move a window into the container at the next free band slot.
    fn reparent_window(&mut self, window: Window) -> Result<()> {
        debug_assert_ne!(self.container, x11rb::NONE);

        println!("Reparenting {}", format_window_id(window));
        self.conn.reparent_window(window, self.container, 0, 0)?;
        self.conn.sync()?;

        let band = band_rect(self.clients);
        self.conn.configure_window(
            window,
            &ConfigureWindowAux::new()
                .x(band.x)
                .y(band.y)
                .width(band.width)
                .height(band.height),
        )?;
        self.conn.map_subwindows(self.container)?;
        self.conn.configure_window(
            window,
            &ConfigureWindowAux::new().stack_mode(StackMode::ABOVE),
        )?;
        self.conn.sync()?;

        self.clients += 1;
        Ok(())
    }

    /// Terminal state: watch the container for substructure changes and
    /// block on the event queue forever. Only a connection failure returns.
    fn run(&mut self) -> Result<()> {
        self.conn.sync()?;
        self.conn.change_window_attributes(
            self.container,
            &ChangeWindowAttributesAux::new().event_mask(EventMask::SUBSTRUCTURE_NOTIFY),
        )?;
        self.conn.flush()?;

        log::info!("Entering event loop");
        loop {
            let event = self.conn.wait_for_event()?;
            log::debug!("Ignoring event: {:?}", event);
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Container first: an empty argument list still creates it.
    let mut vbox = Vbox::new()?;

    if cli.windows.is_empty() {
        bail!("usage: xvbox WINDOW_ID ...");
    }

    for wid in &cli.windows {
        vbox.reparent(wid)?;
    }

    vbox.run()
}
