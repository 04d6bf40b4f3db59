use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(course_db_migration::Migrator).await;
}
