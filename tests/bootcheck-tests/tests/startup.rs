use anyhow::Result;
use bootcheck::*;
use bootcheck_tests::*;
use rand::seq::SliceRandom;
use std::path::PathBuf;
use test_log::test;

#[test]
fn config_from_json() -> Result<()> {
    let json = r#"{
        "state": "existing",
        "discovery": "https://discovery.example.com/3e86b59982e49066",
        "members": [
            { "id": 1, "name": "infra1", "peer_urls": ["http://10.0.1.10:2380"] },
            { "id": 2, "name": "infra2", "peer_urls": ["http://10.0.1.11:2380"] },
            { "id": 3, "name": "infra3", "peer_urls": ["http://10.0.1.12:2380"] }
        ]
    }"#;
    let v: serde_json::Value = serde_json::from_str(json)?;
    let state: ClusterState = v["state"].as_str().unwrap_or_default().parse()?;
    let cluster: StaticMembership = serde_json::from_value(v["members"].clone())?;

    let mut config = static_config(2, &cluster);
    config.cluster_state = state;
    config.discovery_url = v["discovery"].as_str().unwrap_or_default().to_owned();
    config.data_dir = PathBuf::from("/data/infra2");

    assert!(config.should_discover());
    assert_eq!(config.local_member.name, "infra2");
    config.verify_bootstrap_config(RAFT_NONE)?;
    assert_eq!(config.wal_dir(), PathBuf::from("/data/infra2/wal"));
    Ok(())
}

#[test]
fn bad_cluster_state_flag() {
    let e = "restore".parse::<ClusterState>().unwrap_err();
    assert!(e.to_string().contains("restore"));
}

#[test]
fn duplicate_found_in_every_order() -> Result<()> {
    let mut members = vec![
        member(1, &["http://10.0.0.1:2380"]),
        member(2, &["http://10.0.0.2:2380"]),
        member(3, &["http://10.0.0.3:2380", "http://10.0.0.9:2380"]),
        member(4, &["http://10.0.0.4:2380", "http://10.0.0.9:2380"]),
    ];
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        members.shuffle(&mut rng);
        let cluster = StaticMembership::from_members(members.clone())?;
        let config = static_config(1, &cluster);
        assert!(matches!(
            config.verify_bootstrap_config(RAFT_NONE),
            Err(BootstrapError::DuplicatePeerUrl(_))
        ));
    }
    Ok(())
}

#[test]
fn local_member_only_needs_matching_id() -> Result<()> {
    // The local member's own URLs are not part of the check,
    // only the members in the directory are.
    let cluster = StaticMembership::from_members([member(7, &["http://10.0.0.7:2380"])])?;
    let mut config = static_config(7, &cluster);
    config.local_member = member(7, &["http://10.0.0.7:2380", "http://10.0.0.7:2380"]);
    config.verify_bootstrap_config(RAFT_NONE)?;
    Ok(())
}

#[test]
fn repeated_member_id_in_config() {
    // The second entry for ID 1 also repeats its peer URL. Loading the
    // membership must fail instead of collapsing the two entries.
    let json = r#"[
        { "id": 1, "peer_urls": ["http://10.0.0.1:2380"] },
        { "id": 1, "peer_urls": ["http://10.0.0.1:2380"] },
        { "id": 2, "peer_urls": ["http://10.0.0.2:2380"] }
    ]"#;
    let e = serde_json::from_str::<StaticMembership>(json).unwrap_err();
    assert!(e.to_string().contains("duplicate member id 1"));

    let members = vec![
        member(1, &["http://10.0.0.1:2380"]),
        member(1, &["http://10.0.0.1:2380"]),
        member(2, &["http://10.0.0.2:2380"]),
    ];
    assert_eq!(
        StaticMembership::from_members(members).unwrap_err(),
        MembershipError::DuplicateMemberId(MemberId(1))
    );
}
