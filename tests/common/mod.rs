#![allow(dead_code)]

/// Minimal profile page; `header` is the in-game header text.
pub fn profile_page(header: &str, with_recent_games: bool) -> String {
    let recent = if with_recent_games {
        r#"
    <div class="recent_games">
      <div class="recent_game">
        <div class="recent_game_content">
          <div class="game_info">
            <div class="game_info_cap">
              <a href="https://steamcommunity.test/app/730"><img class="game_capsule" src="https://cdn.test/apps/730/capsule.jpg"></a>
            </div>
            <div class="game_info_details">1,024 hrs on record</div>
            <div class="game_name"><a class="whiteLink" href="https://steamcommunity.test/app/730">Counter-Strike &amp; Friends</a></div>
          </div>
        </div>
      </div>
      <div class="recent_game">
        <div class="recent_game_content">
          <div class="game_info">
            <div class="game_info_cap">
              <a href="https://steamcommunity.test/app/570"><img class="game_capsule" src="https://cdn.test/apps/570/capsule.jpg"></a>
            </div>
            <div class="game_name"><a class="whiteLink" href="https://steamcommunity.test/app/570">Dota 2</a></div>
          </div>
        </div>
      </div>
    </div>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>Steam Community :: alice</title></head>
  <body>
    <div class="profile_header">
      <div class="profile_in_game persona in-game">
        <div class="profile_in_game_header">{header}</div>
        <div class="profile_in_game_name">Counter-Strike</div>
      </div>
    </div>
    {recent}
  </body>
</html>"#
    )
}

pub const PROFILE_IN_GAME: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <div class="profile_in_game persona in-game">
      <div class="profile_in_game_header">Currently In-Game</div>
    </div>
    <div class="recent_games">
      <div class="recent_game">
        <div class="game_info">
          <div class="game_info_cap">
            <a href="https://steamcommunity.test/app/730"><img class="game_capsule" src="https://cdn.test/apps/730/capsule.jpg"></a>
          </div>
          <div class="game_name"><a class="whiteLink" href="https://steamcommunity.test/app/730">Counter-Strike &amp; Friends</a></div>
        </div>
      </div>
      <div class="recent_game">
        <div class="game_info">
          <div class="game_info_cap"><a href="https://steamcommunity.test/app/570"><img src="https://cdn.test/apps/570/capsule.jpg"></a></div>
          <div class="game_name"><a href="https://steamcommunity.test/app/570">Dota 2</a></div>
        </div>
      </div>
    </div>
  </body>
</html>"#;

pub const PROFILE_OFFLINE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <div class="profile_in_game persona offline">
      <div class="profile_in_game_header">Currently Offline</div>
    </div>
    <div class="recent_games">
      <div class="recent_game">
        <div class="game_info">
          <div class="game_info_cap"><a href="https://steamcommunity.test/app/570"><img src="https://cdn.test/apps/570/capsule.jpg"></a></div>
          <div class="game_name"><a href="https://steamcommunity.test/app/570">Dota 2</a></div>
        </div>
      </div>
    </div>
  </body>
</html>"#;
