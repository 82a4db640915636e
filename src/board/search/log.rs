/// Summary of a finished search, handed to a [`SearchLogger`].
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: i32,
    pub score: f64,
    pub nodes: u64,
    pub cutoffs: u64,
    pub time_ms: u128,
    pub pv: String,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} score {:.1} nodes {} cutoffs {} time {} pv {}",
            info.depth, info.score, info.nodes, info.cutoffs, info.time_ms, info.pv
        );
    }
}
