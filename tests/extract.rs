// tests/extract.rs

mod common;

use playwatch::probe::extract_status;

use crate::common::{profile_page, PROFILE_IN_GAME, PROFILE_OFFLINE};

#[test]
fn in_game_profile_yields_first_recent_game() {
    let snapshot = extract_status(PROFILE_IN_GAME);

    assert!(snapshot.reachable);
    assert!(snapshot.active);
    assert_eq!(snapshot.label, "Counter-Strike & Friends");
    assert_eq!(snapshot.link, "https://steamcommunity.test/app/730");
    assert_eq!(snapshot.icon, "https://cdn.test/apps/730/capsule.jpg");
}

#[test]
fn offline_profile_has_no_metadata() {
    let snapshot = extract_status(PROFILE_OFFLINE);

    assert!(snapshot.reachable);
    assert!(!snapshot.active);
    assert!(snapshot.label.is_empty());
    assert!(snapshot.link.is_empty());
    assert!(snapshot.icon.is_empty());
}

#[test]
fn header_without_in_game_marker_is_not_active() {
    let html = profile_page("Currently Online", true);

    let snapshot = extract_status(&html);

    assert!(!snapshot.active);
    assert!(snapshot.link.is_empty());
}

#[test]
fn missing_recent_games_degrades_to_empty_fields() {
    let html = profile_page("Currently In-Game", false);

    let snapshot = extract_status(&html);

    assert!(snapshot.active);
    assert!(snapshot.label.is_empty());
    assert!(snapshot.link.is_empty());
    assert!(snapshot.icon.is_empty());
}

#[test]
fn garbage_input_does_not_panic() {
    for html in ["", "<<<>>>", "<div class=", "</div></div>", "<div class=\"recent_games\">"] {
        let snapshot = extract_status(html);
        assert!(!snapshot.active, "input {html:?}");
    }
}

#[test]
fn nested_markup_and_case_are_tolerated() {
    let html = r#"
        <DIV CLASS='profile_in_game_header'><span>Currently</span> <b>In-Game</b></DIV>
        <div class="profile_recentgame_header recent_games">
          <div class="recent_game">
            <div class="game_info">
              <div class="game_info_cap"><a href=https://store.test/app/1><img class="game_capsule" src="https://cdn.test/1.jpg"/></a></div>
              <div class="game_name"><a class="whiteLink" href="https://store.test/app/1">
                 Half-Life
              </a></div>
            </div>
          </div>
        </div>"#;

    let snapshot = extract_status(html);

    assert!(snapshot.active);
    assert_eq!(snapshot.label, "Half-Life");
    assert_eq!(snapshot.link, "https://store.test/app/1");
    assert_eq!(snapshot.icon, "https://cdn.test/1.jpg");
}

#[test]
fn any_in_game_header_marks_active() {
    let html = r#"
        <div class="profile_in_game_header">Currently Online</div>
        <div class="miniprofile">
          <div class="profile_in_game_header">Currently In-Game</div>
        </div>"#;

    assert!(extract_status(html).active);
}

#[test]
fn game_info_is_found_under_a_later_recent_games_list() {
    let html = r#"
        <div class="profile_in_game_header">In-Game</div>
        <div class="recent_games"><div class="showcase_empty">Nothing here</div></div>
        <div class="recent_games">
          <div class="game_info">
            <div class="game_info_cap"><a href="https://store.test/app/440"><img src="https://cdn.test/440.jpg"></a></div>
            <div class="game_name"><a href="https://store.test/app/440">Team Fortress 2</a></div>
          </div>
        </div>"#;

    let snapshot = extract_status(html);

    assert_eq!(snapshot.label, "Team Fortress 2");
    assert_eq!(snapshot.link, "https://store.test/app/440");
    assert_eq!(snapshot.icon, "https://cdn.test/440.jpg");
}

#[test]
fn game_info_outside_recent_games_is_ignored() {
    let html = r#"
        <div class="profile_in_game_header">In-Game</div>
        <div class="game_info">
          <div class="game_name"><a href="https://store.test/app/1">Showcase Game</a></div>
        </div>
        <div class="recent_games">
          <div class="game_info">
            <div class="game_name"><a href="https://store.test/app/2">Recent Game</a></div>
          </div>
        </div>"#;

    assert_eq!(extract_status(html).label, "Recent Game");
}

#[test]
fn nameless_entries_are_skipped_for_the_next_one() {
    let html = r#"
        <div class="profile_in_game_header">In-Game</div>
        <div class="recent_games">
          <div class="game_info">
            <div class="game_info_cap"><a href="https://store.test/app/0"><img src="https://cdn.test/0.jpg"></a></div>
            <div class="game_name"></div>
          </div>
          <div class="game_info">
            <div class="game_info_cap"><a href="https://store.test/app/9"><img src="https://cdn.test/9.jpg"></a></div>
            <div class="game_name"><a href="https://store.test/app/9">Portal</a></div>
          </div>
        </div>"#;

    let snapshot = extract_status(html);

    assert_eq!(snapshot.label, "Portal");
    assert_eq!(snapshot.link, "https://store.test/app/9");
    assert_eq!(snapshot.icon, "https://cdn.test/9.jpg");
}

#[test]
fn name_and_link_anchors_must_be_direct_children() {
    let html = r#"
        <div class="profile_in_game_header">In-Game</div>
        <div class="recent_games">
          <div class="game_info">
            <div class="game_info_cap"><span><a href="https://store.test/app/5">x</a></span><img src="https://cdn.test/5.jpg"></div>
            <div class="game_name"><span><a href="https://store.test/app/5">Nested Name</a></span></div>
          </div>
        </div>"#;

    let snapshot = extract_status(html);

    assert!(snapshot.active);
    assert!(snapshot.label.is_empty());
    assert!(snapshot.link.is_empty());
    // The capsule image is matched at any depth.
    assert_eq!(snapshot.icon, "https://cdn.test/5.jpg");
}
