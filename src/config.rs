use crate::constants::{DEFAULT_EM_ITERATIONS, DEFAULT_PROGRESS_INTERVAL};
use crate::models::{EmTrainerConfig, TotalAccumulation};

pub const DEFAULT_EM_TRAINER_CONFIG: &EmTrainerConfig = &EmTrainerConfig {
    iterations: DEFAULT_EM_ITERATIONS,
    total_accumulation: TotalAccumulation::Sum,
    progress_interval: DEFAULT_PROGRESS_INTERVAL,
    parallel: false,
};
