use shiptalk::app::App;
use shiptalk::cli::{parse_args, run_cli_command, CliCommand};
use shiptalk::error::UiError;
use shiptalk::startup::{init_logging, ForumConfig};
use shiptalk::terminal::{setup_panic_hook, TerminalManager};
use shiptalk::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

fn main() -> Result<()> {
    // Handle flags before any initialization
    let overrides = match parse_args(std::env::args()) {
        Ok(CliCommand::RunTui(overrides)) => overrides,
        Ok(command) => {
            run_cli_command(&command);
            return Ok(());
        }
        Err(err) => {
            eprintln!("[{}] {}", err.error_code(), err.user_message());
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = match ForumConfig::load() {
        Ok(config) => overrides.apply(config),
        Err(err) => {
            eprintln!("[{}] {}", err.error_code(), err.user_message());
            std::process::exit(1);
        }
    };

    // Logging is optional; a bad log path must not keep the forum from starting
    if let Err(err) = init_logging(config.log_file.as_deref()) {
        eprintln!("Warning: {}", err.user_message());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut manager = TerminalManager::new(config.mouse)?;
        let mut app = App::new(config);

        if let Ok(size) = manager.size() {
            app.update_terminal_dimensions(size.width, size.height);
        }

        let result = run_app(manager.terminal(), &mut app).await;

        // Cancel a pending assistant reply before leaving
        app.shutdown();
        manager.restore()?;

        if let Err(ref err) = result {
            tracing::error!("Event loop failed: {:#}", err);
        }
        tracing::info!("ShipTalk exited");
        result
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // Create async event stream for keyboard and mouse input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Err(UiError::ChannelError {
            message: "message receiver already taken".to_string(),
        }
        .into());
    };

    let mut ticker = tokio::time::interval(app.config.tick_rate());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal
                .draw(|f| ui::render(f, &mut *app))
                .map_err(|e| UiError::RenderFailed {
                    component: "frame".to_string(),
                    message: e.to_string(),
                })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                        Event::Mouse(mouse) => app.handle_mouse(mouse),
                        Event::Paste(text) => app.handle_paste(&text),
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        _ => {}
                    },
                    Some(Err(err)) => {
                        let err = UiError::InputError {
                            message: err.to_string(),
                        };
                        tracing::warn!("[{}] {}", err.error_code(), err);
                    }
                    // Input stream closed
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
