use randfs::{AskError, Client, ReplyError};

pub async fn async_test(client: &mut Client) {
    let attached = client.ask_attach("tester").await.expect("Attach failed");

    // Unknown names report not-found and leave the binding where it was
    match client.ask_walk(attached.id, "unknown").await {
        Err(AskError::Failure(ReplyError::NotFound(args))) => {
            assert_eq!(args.name, "unknown")
        }
        x => panic!("Unexpected result: {:?}", x),
    }
    let walked = client
        .ask_walk(attached.id, "integer")
        .await
        .expect("Walk after failure failed");
    assert_eq!(walked.node_id, randfs::server::fs::NODE_INTEGER);

    // Reading is only valid once the handle is open
    match client.ask_read_file(attached.id, 128).await {
        Err(AskError::Failure(ReplyError::WrongOperation(_))) => (),
        x => panic!("Unexpected result: {:?}", x),
    }

    client.ask_open(attached.id).await.expect("Open failed");

    // A handle opens at most once
    match client.ask_open(attached.id).await {
        Err(AskError::Failure(ReplyError::WrongOperation(_))) => (),
        x => panic!("Unexpected result: {:?}", x),
    }

    // Unrecognized commands are rejected without touching the range
    client
        .ask_write(attached.id, &b"range 3 7"[..])
        .await
        .expect("Write failed");
    match client.ask_write(attached.id, &b"foo 1 2"[..]).await {
        Err(AskError::Failure(ReplyError::BadCommand(args))) => {
            assert!(args.reason.contains("foo"), "Bad reason: {}", args.reason)
        }
        x => panic!("Unexpected result: {:?}", x),
    }
    for _ in 0..10 {
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

    // Writing the root directory is the wrong operation entirely
    let root = client.ask_attach("tester").await.expect("Attach failed");
    client.ask_open(root.id).await.expect("Open failed");
    match client.ask_write(root.id, &b"range 1 2"[..]).await {
        Err(AskError::Failure(ReplyError::WrongOperation(_))) => (),
        x => panic!("Unexpected result: {:?}", x),
    }
    client.ask_release(root.id).await.expect("Release failed");

    // Released handles reject everything afterwards, including another
    // release
    client.ask_release(attached.id).await.expect("Release failed");
    match client.ask_read_file(attached.id, 128).await {
        Err(AskError::Failure(ReplyError::InvalidHandle(args))) => {
            assert_eq!(args.id, attached.id)
        }
        x => panic!("Unexpected result: {:?}", x),
    }
    match client.ask_release(attached.id).await {
        Err(AskError::Failure(ReplyError::InvalidHandle(_))) => (),
        x => panic!("Unexpected result: {:?}", x),
    }
}
