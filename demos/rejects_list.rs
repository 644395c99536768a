use mandrill::MandrillClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MandrillClient::from_env()?;
    let email = std::env::var("MANDRILL_EMAIL").ok();

    let entries = client.rejects().list(email.as_deref())?;
    for entry in &entries {
        println!(
            "{} ({}) expired={}",
            entry.email, entry.reason, entry.expired
        );
    }
    println!("{} rejection(s)", entries.len());
    Ok(())
}
