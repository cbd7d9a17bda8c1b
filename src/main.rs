use carpentry_planner::events::{attach, Channel};
use carpentry_planner::model::{LayoutCommand, LayoutEvent};
use carpentry_planner::planner::preferences::{JsonFileStore, MemoryStore};
use carpentry_planner::planner::{
    is_debug_mode, AppContext, ConfigError, LayoutEngine, ReportProjection,
};
use carpentry_planner::ui::{parse_line, render_layout, render_stats, InputLine};
use log::{debug, error, warn};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn init_logging() {
    env_logger::init();
}

fn build_context() -> Result<AppContext, ConfigError> {
    match JsonFileStore::in_user_data_dir() {
        Ok(store) => {
            debug!(target: "main", "Preferences at {}", store.path().display());
            AppContext::builder().store(store).build()
        }
        Err(err) => {
            warn!(target: "main", "{}; preferences will not be saved", err);
            AppContext::builder().store(MemoryStore::new()).build()
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let mut context = match build_context() {
        Ok(context) => context,
        Err(err) => {
            error!(target: "main", "Startup failed: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let (command_emitter, command_observer) = Channel::<LayoutCommand>::new();
    let (event_emitter, event_observer) = Channel::<LayoutEvent>::new();
    let engine = LayoutEngine::new(command_observer, event_emitter);
    let projection = ReportProjection::new();
    attach(&event_observer, &projection);

    let show = |context: &AppContext| {
        let messages = context.messages();
        let projection = projection.borrow();
        println!("{}\n", messages.get("title"));
        println!(
            "{}\n",
            render_layout(projection.footprint(), projection.grid_size(), &messages)
        );
        println!(
            "{}",
            render_stats(projection.report(), projection.grid_size(), &messages)
        );
    };

    println!("{}", context.messages().get("subtitle"));
    println!("{}", context.messages().get("help"));
    show(&context);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(err) = io::stdout().flush() {
            error!(target: "main", "stdout: {}", err);
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                error!(target: "main", "stdin: {}", err);
                return ExitCode::FAILURE;
            }
        }

        match parse_line(&line) {
            Ok(InputLine::Layout(commands)) => {
                if commands.contains(&LayoutCommand::Clear) {
                    println!("{}", context.messages().get("clear"));
                }
                for command in commands {
                    command_emitter.emit(command);
                }
                if is_debug_mode() {
                    println!("{:?}", engine.borrow().footprint());
                }
                show(&context);
            }
            Ok(InputLine::SetLanguage(language)) => {
                let result = context.set_language(language);
                let messages = context.messages();
                match result {
                    Ok(()) => println!("{}", messages.language_changed(language)),
                    Err(err) => println!("{}", messages.language_not_saved(err)),
                }
                show(&context);
            }
            Ok(InputLine::Show) => show(&context),
            Ok(InputLine::Help) => println!("{}", context.messages().get("help")),
            Ok(InputLine::Quit) => break,
            Ok(InputLine::Empty) => {}
            Err(err) => println!("{}", context.messages().invalid_command(err)),
        }
    }

    ExitCode::SUCCESS
}
