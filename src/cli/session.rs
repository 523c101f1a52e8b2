use anyhow::Result;

use super::SessionAction;
use crate::session::{SessionState, SessionStore};

fn print_state(state: &SessionState) {
    match &state.user {
        Some(user) if state.is_authenticated => {
            println!("Signed in as {} <{}>", user.name, user.email)
        }
        _ => println!("Signed out"),
    }
}

pub fn run(action: SessionAction, session_path: &str) -> Result<()> {
    let store = SessionStore::open(session_path);
    let state = match action {
        SessionAction::Status => store.state(),
        SessionAction::Login { email, password } => store.login(&email, &password)?,
        SessionAction::Register {
            name,
            email,
            password,
        } => store.register(&name, &email, &password)?,
        SessionAction::Logout => store.logout()?,
    };
    print_state(&state);
    Ok(())
}
