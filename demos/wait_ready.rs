use crypto_ready::{BridgeParams, CryptoBridge, Ed25519Keypair, NativeBackend, Result};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    crypto_ready::init_logging();

    let args: Vec<String> = env::args().collect();
    let message = args.get(1).cloned().unwrap_or_else(|| "hello".to_string());

    println!("crypto_ready {}", crypto_ready::VERSION);
    println!("==================\n");

    let bridge = Arc::new(CryptoBridge::<NativeBackend>::new(BridgeParams::default()));

    // Consumers only get the gate, never the bridge internals
    let gate = bridge.gate();
    let consumer = tokio::spawn(async move {
        let outcome = gate.wait_outcome().await;
        println!("Consumer saw backend {}", outcome);
        outcome
    });

    println!("Backend ready before init: {}", bridge.is_ready());
    match bridge.sha256(message.as_bytes()) {
        Ok(_) => println!("Unexpected: hashing succeeded before init"),
        Err(e) => println!("Hashing before init: {}", e),
    }

    let initializer = {
        let bridge = bridge.clone();
        tokio::spawn(async move { bridge.initialize_native().await })
    };

    if !bridge.wait_ready().await {
        let outcome = initializer.await.map_err(|e| {
            crypto_ready::Error::BackendInit(format!("initializer task failed: {}", e))
        })?;
        println!("Backend did not become ready: {}", outcome);
        return outcome.into_result();
    }
    consumer.await.map_err(|e| {
        crypto_ready::Error::BackendInit(format!("consumer task failed: {}", e))
    })?;

    println!("\nMessage: {:?}", message);
    println!("SHA-256:    {}", hex::encode(&bridge.sha256(message.as_bytes())?));
    println!("BLAKE2b-256: {}", hex::encode(&bridge.blake2b(message.as_bytes(), &[], 32)?));
    println!("Keccak-256: {}", hex::encode(&bridge.keccak256(message.as_bytes())?));
    println!("TwoX-128:   {}", hex::encode(&bridge.twox(message.as_bytes(), 2)?));

    let keypair = Ed25519Keypair::generate()?;
    let signature = bridge.ed25519_sign(&keypair, message.as_bytes())?;
    let valid = bridge.ed25519_verify(&signature, message.as_bytes(), keypair.public_key())?;
    println!("\nEd25519 public key: {}", hex::encode(keypair.public_key()));
    println!("Signature valid: {}", valid);

    Ok(())
}
