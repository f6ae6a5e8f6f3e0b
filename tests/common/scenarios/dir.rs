use randfs::{reply::NodeKind, Client};

pub async fn async_test(client: &mut Client) {
    let attached = client.ask_attach("tester").await.expect("Attach failed");

    // The root itself can be described without opening it
    let stat = client.ask_stat(attached.id).await.expect("Stat failed");
    assert_eq!(stat.name, "/");
    assert_eq!(stat.kind, NodeKind::Directory);
    assert_eq!(stat.length, 0);
    assert_eq!(stat.owner, "tester");

    client.ask_open(attached.id).await.expect("Open failed");

    let listing = client
        .ask_read_dir(attached.id, 0)
        .await
        .expect("Listing failed");
    let names: Vec<&str> = listing
        .entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["integer", "real"]);
    assert!(listing.entries.iter().all(|entry| entry.length == 0));
    assert!(listing.entries.iter().all(|entry| entry.owner == "tester"));

    // Listing again yields the same entries in the same order
    let again = client
        .ask_read_dir(attached.id, 0)
        .await
        .expect("Listing failed");
    let again_names: Vec<&str> = again
        .entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(again_names, names);

    // And it restarts cleanly from an entry offset
    let rest = client
        .ask_read_dir(attached.id, 1)
        .await
        .expect("Listing failed");
    assert_eq!(rest.entries.len(), 1);
    assert_eq!(rest.entries[0].name, "real");

    client.ask_release(attached.id).await.expect("Release failed");
}
