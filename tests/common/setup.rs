use randfs::{Client, ListeningServer, ServerBuilder};

pub struct TestBench {
    pub server: ListeningServer,
    pub client: Client,
}

pub async fn setup() -> TestBench {
    setup_with_seed(None).await
}

pub async fn setup_with_seed(seed: Option<u64>) -> TestBench {
    init_logger();

    let server = ServerBuilder::default()
        .addr("127.0.0.1:0".parse().expect("Bad test addr"))
        .seed(seed)
        .build()
        .expect("Failed to build server")
        .listen()
        .await
        .expect("Failed to listen");

    let client = Client::connect(server.addr())
        .await
        .expect("Failed to connect");

    TestBench { server, client }
}

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
