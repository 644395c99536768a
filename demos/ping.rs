use mandrill::MandrillClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debug = std::env::var_os("MANDRILL_DEBUG").is_some();
    let client = MandrillClient::builder().debug(debug).build()?;

    println!("{}", client.users().ping()?);
    Ok(())
}
