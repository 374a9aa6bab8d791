use std::collections::HashMap;

/// The two team roles within a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    #[serde(rename = "CT")]
    Ct,
    #[serde(rename = "T")]
    T,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Ct => Side::T,
            Side::T => Side::Ct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinReason {
    StillInProgress,
    BombExploded,
    VipEscaped,
    VipKilled,
    TSaved,
    CtStoppedEscape,
    RoundEndReasonTerroristsStopped,
    BombDefused,
    TKilled,
    CTKilled,
    Draw,
    HostageRescued,
    TimeRanOut,
    RoundEndReasonHostagesNotRescued,
    TerroristsNotEscaped,
    VipNotEscaped,
    GameStart,
    TSurrender,
    CTSurrender,
    TPlanted,
    CTReachedHostage,
}

/// One played round as reported by the upstream demo parser.
///
/// The bomb sub-events are encoded with sentinels instead of options on the
/// wire: an empty planter/defuser id means no plant/defuse happened, a zero
/// explode time means the bomb never went off. Use [`RoundRecord::plant`],
/// [`RoundRecord::defuse`] and [`RoundRecord::explosion`] to decode them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundRecord {
    pub winner: Side,
    #[serde(rename = "winReason")]
    pub win_reason: i32,
    pub planter: String,
    pub defuser: String,
    #[serde(rename = "planterTime")]
    pub planter_time: i64,
    #[serde(rename = "defuserTime")]
    pub defuser_time: i64,
    #[serde(rename = "bombExplodeTime")]
    pub bomb_explode_time: i64,
}

impl RoundRecord {
    pub fn plant(&self) -> Option<(&str, i64)> {
        (!self.planter.is_empty()).then(|| (self.planter.as_str(), self.planter_time))
    }

    pub fn defuse(&self) -> Option<(&str, i64)> {
        (!self.defuser.is_empty()).then(|| (self.defuser.as_str(), self.defuser_time))
    }

    pub fn explosion(&self) -> Option<i64> {
        (self.bomb_explode_time != 0).then_some(self.bomb_explode_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Kill {
    pub weapon: String,
    pub assister: String,
    #[serde(rename = "timeMs")]
    pub time_ms: i64,
    #[serde(rename = "isHeadshot")]
    pub is_headshot: bool,
    #[serde(rename = "attackerBlind")]
    pub attacker_blind: bool,
    #[serde(rename = "assistedFlash")]
    pub assisted_flash: bool,
    #[serde(rename = "noScope")]
    pub no_scope: bool,
    #[serde(rename = "throughSmoke")]
    pub through_smoke: bool,
    #[serde(rename = "penetratedObjects")]
    pub penetrated_objects: i32,
}

/// Attacker -> victim -> the one kill recorded for that pair in the round
pub type KillMap = HashMap<String, HashMap<String, Kill>>;

/// Per-player statistic map where a missing player simply means 0
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T>(pub HashMap<String, T>);

impl<T: Copy + Default> PlayerMap<T> {
    pub fn value(&self, player: &str) -> T {
        self.0.get(player).copied().unwrap_or_default()
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<T> FromIterator<(String, T)> for PlayerMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The per-player statistic table computed upstream. Everything in here is
/// consumed as-is, the derivation layer never recomputes these.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchStats {
    pub kills: PlayerMap<i64>,
    pub assists: PlayerMap<i64>,
    pub deaths: PlayerMap<i64>,
    #[serde(rename = "timesTraded")]
    pub times_traded: PlayerMap<i64>,
    #[serde(rename = "headshotPct")]
    pub headshot_pct: PlayerMap<f64>,
    pub kd: PlayerMap<f64>,
    pub kdiff: PlayerMap<i64>,
    pub kpr: PlayerMap<f64>,
    pub adr: PlayerMap<f64>,
    pub kast: PlayerMap<f64>,
    pub impact: PlayerMap<f64>,
    pub hltv: PlayerMap<f64>,
    pub rws: PlayerMap<f64>,
    #[serde(rename = "utilDamage")]
    pub util_damage: PlayerMap<i64>,
    #[serde(rename = "flashAssists")]
    pub flash_assists: PlayerMap<i64>,
    #[serde(rename = "enemiesFlashed")]
    pub enemies_flashed: PlayerMap<i64>,
    #[serde(rename = "teammatesFlashed")]
    pub teammates_flashed: PlayerMap<i64>,
    #[serde(rename = "flashesThrown")]
    pub flashes_thrown: PlayerMap<i64>,
    #[serde(rename = "smokesThrown")]
    pub smokes_thrown: PlayerMap<i64>,
    #[serde(rename = "molliesThrown")]
    pub mollies_thrown: PlayerMap<i64>,
    #[serde(rename = "HEsThrown")]
    pub hes_thrown: PlayerMap<i64>,
    #[serde(rename = "2k")]
    pub k2: PlayerMap<i64>,
    #[serde(rename = "3k")]
    pub k3: PlayerMap<i64>,
    #[serde(rename = "4k")]
    pub k4: PlayerMap<i64>,
    #[serde(rename = "5k")]
    pub k5: PlayerMap<i64>,
}

/// Every column the scoreboard can be ordered by. Requesting a column is a
/// compile-time concern, there is no stringly-typed lookup that could miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StatColumn {
    Kills,
    Assists,
    Deaths,
    TimesTraded,
    HeadshotPct,
    Kd,
    Kdiff,
    Kpr,
    Adr,
    Kast,
    Impact,
    Hltv,
    Rws,
    UtilDamage,
    FlashAssists,
    EnemiesFlashed,
    TeammatesFlashed,
    FlashesThrown,
    SmokesThrown,
    MolliesThrown,
    HesThrown,
    K2,
    K3,
    K4,
    K5,
}

impl StatColumn {
    pub fn value(&self, stats: &MatchStats, player: &str) -> f64 {
        match self {
            StatColumn::Kills => stats.kills.value(player) as f64,
            StatColumn::Assists => stats.assists.value(player) as f64,
            StatColumn::Deaths => stats.deaths.value(player) as f64,
            StatColumn::TimesTraded => stats.times_traded.value(player) as f64,
            StatColumn::HeadshotPct => stats.headshot_pct.value(player),
            StatColumn::Kd => stats.kd.value(player),
            StatColumn::Kdiff => stats.kdiff.value(player) as f64,
            StatColumn::Kpr => stats.kpr.value(player),
            StatColumn::Adr => stats.adr.value(player),
            StatColumn::Kast => stats.kast.value(player),
            StatColumn::Impact => stats.impact.value(player),
            StatColumn::Hltv => stats.hltv.value(player),
            StatColumn::Rws => stats.rws.value(player),
            StatColumn::UtilDamage => stats.util_damage.value(player) as f64,
            StatColumn::FlashAssists => stats.flash_assists.value(player) as f64,
            StatColumn::EnemiesFlashed => stats.enemies_flashed.value(player) as f64,
            StatColumn::TeammatesFlashed => stats.teammates_flashed.value(player) as f64,
            StatColumn::FlashesThrown => stats.flashes_thrown.value(player) as f64,
            StatColumn::SmokesThrown => stats.smokes_thrown.value(player) as f64,
            StatColumn::MolliesThrown => stats.mollies_thrown.value(player) as f64,
            StatColumn::HesThrown => stats.hes_thrown.value(player) as f64,
            StatColumn::K2 => stats.k2.value(player) as f64,
            StatColumn::K3 => stats.k3.value(player) as f64,
            StatColumn::K4 => stats.k4.value(player) as f64,
            StatColumn::K5 => stats.k5.value(player) as f64,
        }
    }
}

/// The full telemetry document the ingestion component hands over for one
/// finished match. Treated as immutable for the whole derivation pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchTelemetry {
    #[serde(rename = "totalRounds")]
    pub total_rounds: usize,
    /// Player -> the side they played the first half on
    pub teams: HashMap<String, Side>,
    pub rounds: Vec<RoundRecord>,
    #[serde(rename = "killFeed")]
    pub kill_feed: Vec<KillMap>,
    #[serde(flatten)]
    pub stats: MatchStats,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum RoundEvent {
    #[serde(rename = "kill")]
    Kill {
        killer: String,
        victim: String,
        time: i64,
        kill: Kill,
    },
    #[serde(rename = "plant")]
    Plant { planter: String, time: i64 },
    #[serde(rename = "defuse")]
    Defuse { defuser: String, time: i64 },
    #[serde(rename = "bomb_explode")]
    BombExplode { time: i64 },
}

impl RoundEvent {
    pub fn time(&self) -> i64 {
        match self {
            RoundEvent::Kill { time, .. } => *time,
            RoundEvent::Plant { time, .. } => *time,
            RoundEvent::Defuse { time, .. } => *time,
            RoundEvent::BombExplode { time } => *time,
        }
    }
}

/// One derived entry per round: the cumulative score right after the round,
/// the side each team played it on and the merged event timeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundByRoundEntry {
    pub team_a_score: usize,
    pub team_b_score: usize,
    pub team_a_side: Side,
    pub team_b_side: Side,
    pub events: Vec<RoundEvent>,
}

/// Everything this layer adds on top of the raw telemetry. Team A is the
/// team that started on CT, team B the one that started on T.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub team_a_score: usize,
    pub team_b_score: usize,
    pub round_by_round: Vec<RoundByRoundEntry>,
    pub ef_per_flash: PlayerMap<f64>,
}
