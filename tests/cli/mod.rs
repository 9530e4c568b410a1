mod help_contract;
mod run_config_contract;
mod run_database_contract;
mod run_input_contract;
