//! Terminal host shell and entry point.
//!
//! This module provides the thin integration layer between the petid library
//! and the terminal: a read-eval-print shell standing in for the device. It
//! owns the collaborators the core only abstracts over (the auth provider,
//! the navigation stack, the store worker thread) and drives the event loop.
//!
//! # Architecture
//!
//! The shell uses a dedicated worker thread for store operations:
//!
//! ```text
//! ┌─────────────────────────┐
//! │     Shell Thread        │
//! │  ┌──────────────────┐   │
//! │  │ AppState (core)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ mpsc         │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   StoreWorker    │   │  ← Store operations
//! │  │ (worker thread)  │   │  ← JSON persistence
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Startup
//!
//! 1. Parse `--config <path>` and `--link <url>` arguments
//! 2. Load configuration and initialize tracing
//! 3. Create `AppState`, history, auth provider, worker thread
//! 4. Feed the activating link (if any), then the provider's initial
//!    auth notification
//! 5. Enter the command loop
//!
//! An activating `--link` is fed before the initial auth notification, the
//! same ordering a cold start from a scanned tag produces.
//!
//! # Commands
//!
//! - `login <email> <password>` / `signup <email> <password>` / `logout`
//! - `open <pet-id>`: open a pet's management view from the list
//! - `register [pet-id]`: open the registration form (editing when an id
//!   is given)
//! - `profile`: open the owner contact profile form
//! - `save ...`: submit the form on the current screen
//! - `delete <pet-id>`: delete a pet
//! - `share <pet-id>`: print the pet's public scanned-card URL
//! - `scan <url>`: simulate scanning a tag (inbound deep link)
//! - `back`: pop the navigation stack
//! - `quit`: exit
//!
//! # Event Mapping
//!
//! Shell input and collaborator results are translated to library events:
//!
//! - Command line → `Event::SubmitLogin`, `Event::OpenPet`, ...
//! - Provider notification → `Event::AuthChanged { user }`
//! - Provider failure → `Event::AuthFailed { message }`
//! - Navigation action executed → `Event::RouteChanged { location, can_go_back }`
//! - Worker response → `Event::StoreResponse(response)`

#![allow(clippy::multiple_crate_versions)]

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;

use petid::auth::{AuthProvider, LocalAuthProvider};
use petid::nav::{MemoryHistory, Navigator, Route};
use petid::storage::{DocumentStore, JsonStore, MemoryStore};
use petid::worker::{StoreRequest, StoreResponse, StoreWorker};
use petid::{handle_event, initialize, Action, Config, Event, PetForm};

fn main() {
    let args = Args::parse(std::env::args().skip(1));

    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("petid: failed to load config: {e}");
            std::process::exit(1);
        }
    };

    petid::observability::init_tracing(&config);

    let span = tracing::debug_span!("shell_startup");
    let _guard = span.entered();
    tracing::debug!("shell starting");

    let mut shell = Shell::new(&config);

    if let Some(url) = args.link {
        shell.process(Event::LinkOpened { url });
    }
    shell.pump_auth_notifications();
    shell.render();

    shell.run();
}

/// Command-line arguments.
struct Args {
    /// Path to the TOML configuration file.
    config: Option<PathBuf>,
    /// Activating deep link, as if the process were launched from a scan.
    link: Option<String>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut parsed = Self {
            config: None,
            link: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config = args.next().map(PathBuf::from),
                "--link" => parsed.link = args.next(),
                other => {
                    eprintln!("petid: ignoring unknown argument: {other}");
                }
            }
        }

        parsed
    }
}

/// Host shell state.
///
/// Wraps the library's `AppState` with the collaborators the core abstracts
/// over: the auth provider, the navigation stack, and the worker channel.
struct Shell {
    /// Core application state from the library layer.
    app: petid::AppState,

    /// In-memory auth provider (the device's auth collaborator).
    provider: LocalAuthProvider,

    /// In-process navigation stack.
    history: MemoryHistory,

    /// Request channel into the worker thread.
    worker_tx: mpsc::Sender<StoreRequest>,

    /// Response channel out of the worker thread.
    worker_rx: mpsc::Receiver<StoreResponse>,

    /// Store requests posted but not yet answered.
    pending_responses: usize,

    /// Whether any processed event asked for a redraw.
    needs_render: bool,
}

impl Shell {
    /// Creates the shell and spawns the worker thread.
    fn new(config: &Config) -> Self {
        let app = initialize(config);

        let data_dir = config
            .data_dir
            .clone()
            .unwrap_or_else(petid::infrastructure::paths::get_data_dir);
        let store: Box<dyn DocumentStore> = match JsonStore::new(data_dir.join("pets.json")) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::debug!(error = %e, "json store unavailable, falling back to memory");
                eprintln!("petid: store unavailable ({e}); records will not persist");
                Box::new(MemoryStore::default())
            }
        };

        let (worker_tx, request_rx) = mpsc::channel::<StoreRequest>();
        let (response_tx, worker_rx) = mpsc::channel::<StoreResponse>();
        std::thread::spawn(move || {
            let mut worker = StoreWorker::with_store(store);
            while let Ok(request) = request_rx.recv() {
                let response = worker.handle_request(request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        Self {
            app,
            provider: LocalAuthProvider::new(),
            history: MemoryHistory::new(),
            worker_tx,
            worker_rx,
            pending_responses: 0,
            needs_render: false,
        }
    }

    /// Runs the command loop until `quit` or end of input.
    fn run(&mut self) {
        let stdin = std::io::stdin();
        loop {
            print!("> ");
            let _ = std::io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            match self.map_command(line) {
                Some(event) => self.process(event),
                None => println!("unknown command: {line}"),
            }
            self.pump_auth_notifications();
            self.render();
        }
        tracing::debug!("shell exiting");
    }

    /// Maps a command line to a library event.
    fn map_command(&self, line: &str) -> Option<Event> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?;
        let rest: Vec<&str> = parts.collect();

        match command {
            "login" => match rest.as_slice() {
                [] => Some(Event::OpenLogin),
                [email, password] => Some(Event::SubmitLogin {
                    email: (*email).to_string(),
                    password: (*password).to_string(),
                }),
                _ => {
                    println!("usage: login [<email> <password>]");
                    None
                }
            },
            "signup" => match rest.as_slice() {
                [] => Some(Event::OpenSignup),
                [email, password] => Some(Event::SubmitSignup {
                    email: (*email).to_string(),
                    password: (*password).to_string(),
                }),
                _ => {
                    println!("usage: signup [<email> <password>]");
                    None
                }
            },
            "logout" => Some(Event::LogoutRequested),
            "open" => rest.first().map(|pet_id| Event::OpenPet {
                pet_id: (*pet_id).to_string(),
            }),
            "register" => Some(Event::OpenRegister {
                pet_id: rest.first().map(|id| (*id).to_string()),
            }),
            "profile" => Some(Event::OpenProfile),
            "save" => self.map_save_command(&rest),
            "delete" => rest.first().map(|pet_id| Event::DeletePetRequested {
                pet_id: (*pet_id).to_string(),
            }),
            "share" => rest.first().map(|pet_id| Event::SharePetRequested {
                pet_id: (*pet_id).to_string(),
            }),
            "scan" => rest.first().map(|url| Event::LinkOpened {
                url: (*url).to_string(),
            }),
            "back" => Some(Event::BackPressed),
            _ => None,
        }
    }

    /// Maps a `save` command against the screen currently in view.
    ///
    /// On the registration screen the arguments are the pet form; on the
    /// profile screen they are the contact card. Elsewhere `save` is not a
    /// command.
    fn map_save_command(&self, rest: &[&str]) -> Option<Event> {
        match &self.app.route {
            Route::PetRegister { pet_id } => {
                let form = parse_pet_form(rest)?;
                Some(Event::SavePetRequested {
                    pet_id: pet_id.clone(),
                    form,
                })
            }
            Route::Profile => match rest {
                [name, contact @ ..] if !contact.is_empty() => {
                    Some(Event::SaveProfileRequested {
                        name: (*name).to_string(),
                        contact: contact.join(" "),
                    })
                }
                _ => {
                    println!("usage: save <name> <contact>");
                    None
                }
            },
            _ => {
                println!("nothing to save on this screen");
                None
            }
        }
    }

    /// Processes one event and everything it causes.
    ///
    /// Actions may raise further events (a navigation action raises a route
    /// change, a worker post raises a response), so the queue drains until
    /// quiescent.
    fn process(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            match handle_event(&mut self.app, &event) {
                Ok((should_render, actions)) => {
                    self.needs_render |= should_render;
                    for action in actions {
                        self.execute_action(&action, &mut queue);
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    eprintln!("petid: {e}");
                }
            }

            // One response per posted request; block until the worker has
            // answered everything raised so far.
            while self.pending_responses > 0 {
                match self.worker_rx.recv() {
                    Ok(response) => {
                        self.pending_responses -= 1;
                        queue.push_back(Event::StoreResponse(response));
                    }
                    Err(_) => {
                        self.pending_responses = 0;
                        eprintln!("petid: store worker is gone");
                    }
                }
            }
        }
    }

    /// Executes an action, queueing the events it raises.
    fn execute_action(&mut self, action: &Action, queue: &mut VecDeque<Event>) {
        match action {
            Action::Replace { location } => {
                if let Err(e) = self.history.replace(location) {
                    tracing::debug!(error = %e, "history replace failed");
                    return;
                }
                queue.push_back(self.route_changed());
            }
            Action::Push { location } => {
                if let Err(e) = self.history.push(location) {
                    tracing::debug!(error = %e, "history push failed");
                    return;
                }
                queue.push_back(self.route_changed());
            }
            Action::Back => {
                if let Err(e) = self.history.back() {
                    tracing::debug!(error = %e, "history pop failed");
                    return;
                }
                queue.push_back(self.route_changed());
            }
            Action::SignIn { email, password } => {
                if let Err(e) = self.provider.sign_in(email, password) {
                    queue.push_back(Event::AuthFailed {
                        message: e.to_string(),
                    });
                }
                self.queue_auth_notifications(queue);
            }
            Action::SignUp { email, password } => {
                if let Err(e) = self.provider.sign_up(email, password) {
                    queue.push_back(Event::AuthFailed {
                        message: e.to_string(),
                    });
                }
                self.queue_auth_notifications(queue);
            }
            Action::SignOut => {
                if let Err(e) = self.provider.sign_out() {
                    queue.push_back(Event::AuthFailed {
                        message: e.to_string(),
                    });
                }
                self.queue_auth_notifications(queue);
            }
            Action::PostToWorker(request) => {
                tracing::debug!(request = ?request, "posting request to worker");
                if self.worker_tx.send(request.clone()).is_ok() {
                    self.pending_responses += 1;
                } else {
                    eprintln!("petid: store worker is gone");
                }
            }
            Action::Share { url } => {
                println!("share this link: {url}");
            }
        }
    }

    /// Builds the route-change event for the navigator's current position.
    fn route_changed(&self) -> Event {
        Event::RouteChanged {
            location: self.history.current().to_string(),
            can_go_back: self.history.can_go_back(),
        }
    }

    /// Drains provider notifications into the event loop.
    fn pump_auth_notifications(&mut self) {
        for user in self.provider.take_notifications() {
            self.process(Event::AuthChanged { user });
        }
    }

    /// Queues provider notifications raised by the action just executed.
    fn queue_auth_notifications(&mut self, queue: &mut VecDeque<Event>) {
        for user in self.provider.take_notifications() {
            queue.push_back(Event::AuthChanged { user });
        }
    }

    /// Redraws the screen if any processed event asked for it.
    fn render(&mut self) {
        if self.needs_render {
            petid::ui::render(&self.app);
            self.needs_render = false;
        }
    }
}

/// Parses registration form arguments.
///
/// Shape: `<name> <breed> <sex> [--vaccinated] [--diseases <text...>]`.
fn parse_pet_form(args: &[&str]) -> Option<PetForm> {
    let [name, breed, sex, flags @ ..] = args else {
        println!("usage: save <name> <breed> <sex> [--vaccinated] [--diseases <text>]");
        return None;
    };

    let mut form = PetForm::new(*name, *breed, *sex);
    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        match *flag {
            "--vaccinated" => form.vaccinated = true,
            "--diseases" => {
                let text: Vec<&str> = flags.by_ref().copied().collect();
                if text.is_empty() {
                    println!("--diseases needs a value");
                    return None;
                }
                form.diseases = Some(text.join(" "));
            }
            other => {
                println!("unknown flag: {other}");
                return None;
            }
        }
    }

    Some(form)
}
