use linescore::schedule::{GameStatus, Snapshot};
use linescore::TeamNameTable;

const SNAPSHOT: &str = r#"{
  "update_time": "2025-05-03 17:05:00",
  "total_games": 4,
  "games": [
    {
      "away_team": "Uni-President 7-Eleven Lions",
      "home_team": "CTBC Brothers",
      "away_score": "5",
      "home_score": "2",
      "status": "✅ 已結束",
      "inning": "",
      "game_time": "",
      "element_class": "game_item final",
      "element_id": "",
      "game_link": "https://www.cpbl.com.tw/box?year=2025&kindCode=A&gameSno=41",
      "source": "javascript"
    },
    {
      "away_team": "TSG Hawks",
      "home_team": "Wei Chuan Dragons",
      "away_score": "0",
      "home_score": "0",
      "status": "⏰ 未開始",
      "game_time": "18:35",
      "element_class": "game_item"
    },
    {
      "away_team": "TSG Hawks",
      "home_team": "Wei Chuan Dragons",
      "away_score": "0",
      "home_score": "0",
      "status": "⏰ 未開始",
      "element_class": "game_item"
    },
    {
      "away_team": "Lamigo Monkeys",
      "home_team": "Fubon Guardians",
      "element_class": "game_item live"
    }
  ],
  "source": "CPBL官網 + JS抓取"
}"#;

#[test]
fn renders_snapshot_with_display_names() {
    let snapshot = Snapshot::from_json_reader(SNAPSHOT.as_bytes()).unwrap();
    assert_eq!(snapshot.total_games, 4);
    let games = snapshot.games();
    assert_eq!(games.len(), 3);
    assert_eq!(games[0].status(), GameStatus::Final);
    assert_eq!(games[2].status(), GameStatus::Live);
    assert_eq!(games[2].away_score(), None);

    assert_eq!(
        snapshot.render(&TeamNameTable::cpbl()),
        "更新時間：2025-05-03 17:05:00\n\
         ✅ 已結束 統一7-ELEVEN獅 5 - 2 中信兄弟\n\
         ⏰ 未開始 台鋼雄鷹 vs 味全龍 18:35\n\
         🔴 進行中 Lamigo Monkeys vs 富邦悍將"
    );
}
