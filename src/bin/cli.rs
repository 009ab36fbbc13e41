use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use todoapp::cli::{clear_seeded_data, create_admin, seed_demo_data};

#[derive(Parser)]
#[command(name = "todoapp-cli")]
#[command(about = "Todoapp CLI - Administrative tools for the todo services", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account (or promote an existing user)
    CreateAdmin {
        /// First name of the admin
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the admin
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and todos
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of todos per user
        #[arg(short = 't', long, default_value = "5")]
        todos_per_user: usize,
    },
    /// Clear all seeded data
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_admin(&pool, first_name, last_name, email, password).await,
        Commands::Seed {
            users,
            todos_per_user,
        } => handle_seed(&pool, users, todos_per_user).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &sqlx::postgres::PgPool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    // Use provided values or prompt interactively
    let first_name = first_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("First name")
            .interact_text()
            .expect("Failed to read first name")
    });

    let last_name = last_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Last name")
            .interact_text()
            .expect("Failed to read last name")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &first_name, &last_name, &email, &password).await {
        Ok(_) => {
            println!("\n✅ Admin created successfully!");
            println!("   Email: {}", email);
            println!("   Name: {} {}", first_name, last_name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &sqlx::postgres::PgPool, users: usize, todos_per_user: usize) {
    match seed_demo_data(pool, users, todos_per_user).await {
        Ok(_) => println!("\n✅ Seeding complete"),
        Err(e) => {
            eprintln!("\n❌ Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(pool: &sqlx::postgres::PgPool) {
    match clear_seeded_data(pool).await {
        Ok(_) => println!("\n✅ Seeded data cleared"),
        Err(e) => {
            eprintln!("\n❌ Error clearing seeded data: {}", e);
            std::process::exit(1);
        }
    }
}
