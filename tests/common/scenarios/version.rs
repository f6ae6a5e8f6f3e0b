use randfs::Client;

pub async fn async_test(client: &mut Client) {
    client.ask_heartbeat().await.expect("Heartbeat failed");

    let version = client.ask_version().await.expect("Version failed");
    assert_eq!(version.version, env!("CARGO_PKG_VERSION"));
}
