//! Constant value definitions to use across the whole program

pub const CONFIG_FILE_NAME: &str = "cxxbench";
pub const CONFIG_FILE_EXT: &str = "toml";
pub const PLOT_FILE_EXT: &str = "svg";

pub const OBJ_FILE_EXT_GNU: &str = "o";
pub const OBJ_FILE_EXT_MSVC: &str = "obj";

/// Defaults shared by both suites when neither the cli nor the config file says otherwise
pub mod defaults {
    pub const PLOT_WIDTH: u32 = 1280;
    pub const PLOT_HEIGHT: u32 = 800;
    pub const FIT_DEGREE: usize = 4;
}

pub mod debug_messages {
    pub const MAPPING_CFG_TO_MODEL: &str =
        "Proceeding to map the configuration file to the BenchModel entity";
    pub const NO_CFG_FILE_FOUND: &str =
        "No configuration file found. Using the suite defaults plus the cli arguments";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const FAILURE_GATHERING_WORKING_DIR_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path of the working directory";
    pub const FAILURE_BUILDING_MODEL: &str = "Error building the benchmark model";
    pub const FAILURE_TIMING_SUITE: &str = "Failed to time the benchmark suite";
    pub const FAILURE_READING_MEASUREMENTS: &str =
        "Failed to read the measurements from the standard input";
    pub const FAILURE_RENDERING_PLOT: &str = "Failed to render the plot";
    pub const FAILURE_WRITING_SCRATCH_FILE: &str = "Could not write the scratch source file";
    pub const FAILURE_SPAWNING_COMPILER: &str =
        "Unable to launch the compiler. Is the driver installed and on the PATH?";
    pub const FAILURE_WRITING_MEASUREMENT: &str = "Could not emit the measurement line";
    pub const ZERO_ITERATIONS: &str = "The number of iterations per configuration must be at least 1";
    pub const ZERO_SIZE: &str = "Every size of the sweep must be at least 1";
    pub const UNKNOWN_CONFIGURATION: &str = "Unknown strategy combination for the suite";
}
