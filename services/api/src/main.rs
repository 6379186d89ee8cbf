use jobtegrity_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("jobtegrity error: {err}");
        std::process::exit(1);
    }
}
