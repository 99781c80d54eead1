use hooks::{Event, Registry};

// Define your events
#[derive(Clone, Debug)]
enum UserEvent {
    Created { user_id: String },
}

impl Event for UserEvent {
    fn name(&self) -> &str {
        match self {
            UserEvent::Created { .. } => "User::create",
        }
    }
}

// A collaborator that announces what it did through the registry
struct User {
    id: String,
    name: String,
}

impl User {
    fn create(&self, registry: &Registry<UserEvent>) {
        println!("User {} created", self.name);

        registry.trigger(&UserEvent::Created {
            user_id: self.id.clone(),
        });
    }
}

fn main() {
    // Show the registry's trace output (RUST_LOG=trace for everything)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .init();

    let registry = Registry::new();

    // Subscribe to user creation
    registry.add_hook("User::create", |event: &UserEvent| {
        let UserEvent::Created { user_id } = event;
        println!("welcome mail queued for {user_id}");
    });
    registry.add_hook("User::create", |event: &UserEvent| {
        let UserEvent::Created { user_id } = event;
        println!("audit entry written for {user_id}");
    });

    let user = User {
        id: "42".into(),
        name: "Jan".into(),
    };
    user.create(&registry);
}
