mod common;

use trailhead_scraper::{blocking, Error, Profile};

use self::common::{config, trailhead, FakeSite, INCORRECT_USERNAME, TBID, TOTAL, USERNAME};

#[tokio::test]
async fn identifier_on_construction() {
    let site = FakeSite::new();

    let profile = Profile::with_trailhead(trailhead(&site), USERNAME)
        .await
        .unwrap();

    assert_eq!(profile.identifier(), TBID);
    assert_eq!(profile.username(), USERNAME);
    assert_eq!(site.page_requests(), 1);
    assert!(profile.cached_rank_data().is_none());
    assert!(profile.cached_awards().is_none());
}

#[tokio::test]
async fn incorrect_username_fails_construction() {
    let site = FakeSite::new();

    let res = Profile::with_trailhead(trailhead(&site), INCORRECT_USERNAME).await;

    assert!(matches!(res, Err(Error::Extraction { .. })));
}

#[tokio::test]
async fn given_identifier() {
    let site = FakeSite::new();

    let mut profile = Profile::with_identifier(trailhead(&site), USERNAME, "testtbid");

    assert_eq!(profile.identifier(), "testtbid");
    assert!(site.received().is_empty());
    assert!(matches!(profile.rank_data().await, Err(Error::Rpc { .. })));
    assert!(profile.cached_rank_data().is_none());
}

#[tokio::test]
async fn rank_data_is_cached() {
    let site = FakeSite::new();
    let mut profile = Profile::with_identifier(trailhead(&site), USERNAME, TBID);

    let first = profile.rank_data().await.unwrap().clone();
    let second = profile.rank_data().await.unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(first.earned_badge_total(), Some(TOTAL as u64));
    assert_eq!(site.aura_requests().len(), 1);
}

#[tokio::test]
async fn awards_fetch_rank_data_first() {
    let site = FakeSite::new();
    let mut profile = Profile::with_identifier(trailhead(&site), USERNAME, TBID);

    assert_eq!(profile.awards().await.unwrap().len(), TOTAL);
    assert!(profile.cached_rank_data().is_some());

    let methods: Vec<_> = site
        .aura_requests()
        .iter()
        .map(|req| req.action()["method"].as_str().unwrap().to_owned())
        .collect();

    assert_eq!(
        methods,
        [
            "fetchTrailheadData",
            "fetchTrailheadBadges",
            "fetchTrailheadBadges",
            "fetchTrailheadBadges",
            "fetchTrailheadBadges",
        ]
    );

    // second access is served from the cache
    assert_eq!(profile.awards().await.unwrap().len(), TOTAL);
    assert_eq!(profile.cached_awards().map(<[_]>::len), Some(TOTAL));
    assert_eq!(site.aura_requests().len(), 5);
}

#[tokio::test]
async fn awards_reuse_cached_rank_data() {
    let site = FakeSite::new();
    let mut profile = Profile::with_identifier(trailhead(&site), USERNAME, TBID);

    profile.rank_data().await.unwrap();
    profile.awards().await.unwrap();

    assert_eq!(site.aura_requests().len(), 5);
}

#[tokio::test]
async fn names_are_cached() {
    let site = FakeSite::new();
    let mut profile = Profile::with_trailhead(trailhead(&site), USERNAME)
        .await
        .unwrap();

    assert_eq!(profile.first_name().await.unwrap(), Some("Emily"));
    assert_eq!(profile.last_name().await.unwrap(), Some("Castelli"));
    assert!(profile
        .cached_profile_data()
        .is_some_and(|data| data.get("pickLists").is_none()));

    // one request for the tbid, one for the profile data
    assert_eq!(site.page_requests(), 2);
}

#[test]
fn blocking_trailhead() {
    let site = FakeSite::new();
    let trailhead = blocking::Trailhead::with_transport(site.clone(), config()).unwrap();

    assert_eq!(&*trailhead.fetch_identifier(USERNAME).unwrap(), TBID);

    let rank = trailhead.fetch_rank_data(USERNAME, Some(TBID)).unwrap();
    let awards = trailhead.fetch_awards(USERNAME, Some(TBID), None).unwrap();

    assert_eq!(rank.earned_badge_total(), Some(awards.len() as u64));
    assert!(trailhead.fetch_identifier(INCORRECT_USERNAME).is_err());
}

#[test]
fn blocking_profile() {
    let site = FakeSite::new();
    let mut profile = blocking::Profile::with_transport(site.clone(), config(), USERNAME).unwrap();

    assert_eq!(profile.identifier(), TBID);
    assert!(profile.cached_rank_data().is_none());
    assert!(profile.cached_awards().is_none());

    assert_eq!(profile.awards().unwrap().len(), TOTAL);
    assert_eq!(profile.profile_data().unwrap().last_name(), Some("Castelli"));
    assert_eq!(site.aura_requests().len(), 5);

    assert_eq!(profile.first_name().unwrap(), Some("Emily"));
    assert_eq!(profile.last_name().unwrap(), Some("Castelli"));
    assert_eq!(
        profile.cached_rank_data().and_then(|rank| rank.earned_badge_total()),
        Some(TOTAL as u64)
    );
    assert_eq!(profile.cached_awards().map(<[_]>::len), Some(TOTAL));
    assert!(profile.cached_profile_data().is_some());
    // the tbid and the profile data were each requested once
    assert_eq!(site.page_requests(), 2);
}
