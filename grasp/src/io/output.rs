use polycut::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::GraspConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct GraspOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: GraspConfig,
}
