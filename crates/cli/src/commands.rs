pub mod add;
pub mod delete;
pub mod init;
pub mod run;
pub mod show;
