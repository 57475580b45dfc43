//! Session commands: login, logout, whoami, guard.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use nubo_core::session::{GuardDecision, RouteGuard, SessionRecord, post_login_target};

use crate::context::AppContext;

pub async fn login(ctx: &AppContext, email: &str, password: &str, from: Option<&str>) -> Result<()> {
    let record = ctx.store.login(email, password).await?;

    print_session(&record);
    println!("Continue to: {}", post_login_target(from));
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.store.logout().await?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.store.current_session().await {
        Some(record) => print_session(&record),
        None => println!("Not logged in"),
    }
    tracing::debug!(key = %ctx.config.session.storage_key, "Session storage key");
    Ok(())
}

pub async fn guard(ctx: &AppContext, path: &str) -> Result<()> {
    match RouteGuard::new().check(&ctx.store, path).await {
        GuardDecision::Allow => println!("allow {}", path),
        GuardDecision::Pending => println!("pending {}", path),
        GuardDecision::Redirect { to, from } => println!("redirect {} (from {})", to, from),
    }
    Ok(())
}

fn print_session(record: &SessionRecord) {
    println!("{} <{}>", record.display_name, record.email);
    println!("Last login: {}", last_login_label(record.last_login));
    println!("IP: {}", record.ip);
}

fn last_login_label(last_login: Option<DateTime<Utc>>) -> String {
    match last_login {
        Some(at) => at
            .with_timezone(&Local)
            .format("%A %-d %B, %H:%M")
            .to_string(),
        None => "first session".to_string(),
    }
}
