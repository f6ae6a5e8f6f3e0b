use randfs::{reply::NodeKind, Client};

pub async fn async_test(client: &mut Client) {
    // Walk from the root down to the integer file, then back up and down
    // again to prove `..` rebinds to the root
    let attached = client.ask_attach("tester").await.expect("Attach failed");
    let walked = client
        .ask_walk(attached.id, "integer")
        .await
        .expect("Walk failed");
    assert_eq!(walked.kind, NodeKind::IntegerFile);

    let back = client
        .ask_walk(attached.id, "..")
        .await
        .expect("Walk to .. failed");
    assert_eq!(back.node_id, attached.node_id);

    client
        .ask_walk(attached.id, "integer")
        .await
        .expect("Walk failed");
    client.ask_open(attached.id).await.expect("Open failed");

    // Every read is a fresh draw from the default integer range
    for _ in 0..10 {
        let contents = client
            .ask_read_file(attached.id, 128)
            .await
            .expect("Read failed");
        let text =
            String::from_utf8(contents.data).expect("Content is not text");
        assert!(text.ends_with('\n'), "Missing newline: {:?}", text);

        let value: i64 =
            text.trim().parse().expect("Content is not an integer");
        assert!(
            (0..=2_147_483_647).contains(&value),
            "Out of range: {}",
            value
        );
    }

    // Narrow the range and watch every subsequent read respect it
    client
        .ask_write(attached.id, &b"range 3 7"[..])
        .await
        .expect("Write failed");
    for _ in 0..20 {
        let contents = client
            .ask_read_file(attached.id, 128)
            .await
            .expect("Read failed");
        let text =
            String::from_utf8(contents.data).expect("Content is not text");
        let value: i64 =
            text.trim().parse().expect("Content is not an integer");
        assert!((3..=7).contains(&value), "Out of range: {}", value);
    }

    client.ask_release(attached.id).await.expect("Release failed");
}

pub async fn async_test_isolated_sessions(client: &mut Client) {
    // Two independent opens of the same file get independent ranges
    let a = client.ask_attach("tester").await.expect("Attach failed");
    let b = client.ask_attach("tester").await.expect("Attach failed");

    for handle in &[a.id, b.id] {
        client
            .ask_walk(*handle, "integer")
            .await
            .expect("Walk failed");
        client.ask_open(*handle).await.expect("Open failed");
    }

    client
        .ask_write(a.id, &b"range 10 20"[..])
        .await
        .expect("Write failed");
    client
        .ask_write(b.id, &b"range 30 40"[..])
        .await
        .expect("Write failed");

    for _ in 0..20 {
        let text = read_text(client, a.id).await;
        let value: i64 =
            text.trim().parse().expect("Content is not an integer");
        assert!((10..=20).contains(&value), "Out of range: {}", value);

        let text = read_text(client, b.id).await;
        let value: i64 =
            text.trim().parse().expect("Content is not an integer");
        assert!((30..=40).contains(&value), "Out of range: {}", value);
    }

    client.ask_release(a.id).await.expect("Release failed");
    client.ask_release(b.id).await.expect("Release failed");
}

pub async fn async_test_real_file(client: &mut Client) {
    let attached = client.ask_attach("tester").await.expect("Attach failed");
    client
        .ask_walk(attached.id, "real")
        .await
        .expect("Walk failed");
    client.ask_open(attached.id).await.expect("Open failed");

    // Default draws fall within the unit interval
    for _ in 0..10 {
        let text = read_text(client, attached.id).await;
        let value: f64 =
            text.trim().parse().expect("Content is not a number");
        assert!(
            (0.0..=1.0).contains(&value),
            "Out of range: {}",
            value
        );
    }

    // Short reads hand back a prefix of the formatted text
    let contents = client
        .ask_read_file(attached.id, 2)
        .await
        .expect("Read failed");
    assert_eq!(contents.data.len(), 2);

    // A single-argument range pins both bounds, so the file turns
    // deterministic
    client
        .ask_write(attached.id, &b"range 2.5"[..])
        .await
        .expect("Write failed");
    for _ in 0..5 {
        assert_eq!(read_text(client, attached.id).await, "2.500000\n");
    }

    client.ask_release(attached.id).await.expect("Release failed");
}

async fn read_text(client: &mut Client, id: u32) -> String {
    let contents = client.ask_read_file(id, 128).await.expect("Read failed");
    String::from_utf8(contents.data).expect("Content is not text")
}
