use tgcontext_rs::BoxError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), BoxError> {
    tgcontext_rs::run().await
}
