// SPDX short identifier: Unlicense

use cryptonote_wallet::{
    common::*,
    random::SeededScalarSource,
    requests::{
        FindOutputsRequest,
        OutputEntry
    },
    scan::{
        self,
        DerivationSecret,
        OutputRecord,
        SpendKeySet
    }
};

//A Monero miner transaction paying the account below
const SPEND_SECRET: &str = "57cabb831c03159455ef561e7ce7daf841c5921b264f837d970115b9ef24c100";
const VIEW_SECRET: &str = "b526321e8a138afba32063ac87d21f3deb05cb40a46410f8fe861f5ab95ac606";
const TX_PUBLIC: &str = "b0f38ad895b9a7bc053e9be31ddd16139ad7006396ae7a29eb6365306ae6f4b7";
const OUTPUT_KEY: &str = "e928dfd0a413a4eac0b541fcc434c56da56cb34c95d8d6916146c3a4f7071ae8";
const OUTPUT_AMOUNT: u64 = 35184338534400;
const OUTPUT_SECRET: &str = "f984b89e6c4f18ff1d6e2bd9eb5571097dbc48d5d7b4cc51ac1a548cb9d3b809";

fn bytes(hex_str: &str) -> [u8; 32] {
    return hex::decode(hex_str).unwrap().try_into().unwrap()
}

fn key_pair(secret: &str) -> KeyPair {
    return KeyPair::from_secret(SecretKey::decode(&bytes(secret), KeyField::Encoded).unwrap())
}

fn known_request(outputs: Vec<OutputEntry>) -> FindOutputsRequest {
    return FindOutputsRequest {
        transaction_public_key: TX_PUBLIC.to_owned(),
        outputs,
        view_secret_key: VIEW_SECRET.to_owned(),
        spend_public_keys: vec!(key_pair(SPEND_SECRET).public().to_hex())
    }
}

#[test]
fn known_transaction_test() {
    let spend = key_pair(SPEND_SECRET);
    let view = key_pair(VIEW_SECRET);
    let request = known_request(vec!(
        OutputEntry{amount: 1, key: view.public().to_hex()},
        OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()}
    ));

    //The payment was built for index 0, so at index 1 it must not match
    let matches = request.validate().unwrap().execute().unwrap();
    assert!(matches.is_empty());

    let request = known_request(vec!(
        OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()},
        OutputEntry{amount: 1, key: view.public().to_hex()}
    ));
    let matches = request.validate().unwrap().execute().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[0].amount, OUTPUT_AMOUNT);
    assert_eq!(matches[0].output_key.to_hex(), OUTPUT_KEY);
    assert!(matches[0].spend_key == *spend.public());

    //Recover the one-time secret key of the output
    let tx_public = PublicKey::decode(&bytes(TX_PUBLIC), KeyField::TransactionPublicKey).unwrap();
    let secret = scan::recover_output_secret(&tx_public, view.secret(), spend.secret(), 0);
    assert_eq!(secret.to_hex(), OUTPUT_SECRET);
    assert!(secret.to_public() == matches[0].output_key);
}

#[test]
fn true_positive_test() {
    let source = SeededScalarSource::new(200);
    let view = KeyPair::generate(&source);
    let spend_keys: Vec<KeyPair> = (0..3).map(|_| KeyPair::generate(&source)).collect();
    let transaction = KeyPair::generate(&source);
    let sender = DerivationSecret::from_sender(transaction.secret(), view.public());

    //Output i pays spend key i % 3
    let outputs: Vec<OutputRecord> = (0..9u64).map(|i| OutputRecord {
        amount: 1000 + i,
        key: *sender.output_public_key(i, spend_keys[i as usize % 3].public()).as_bytes()
    }).collect();
    let publics: Vec<PublicKey> = spend_keys.iter().map(|pair| *pair.public()).collect();

    let matches = scan::scan(transaction.public(), &outputs, view.secret(), &publics);
    assert_eq!(matches.len(), 9);
    for (i, found) in matches.iter().enumerate() {
        assert_eq!(found.index, i);
        assert_eq!(found.amount, 1000 + i as u64);
        assert!(found.spend_key == *spend_keys[i % 3].public());
    }

    //Only the keys asked for are reported
    let matches = scan::scan(transaction.public(), &outputs, view.secret(), &publics[1..2]);
    assert_eq!(matches.iter().map(|found| found.index).collect::<Vec<_>>(), vec!(1, 4, 7));
}

#[test]
fn no_false_positives_test() {
    let source = SeededScalarSource::new(201);
    let view = KeyPair::generate(&source);
    let spend = KeyPair::generate(&source);
    let other_view = KeyPair::generate(&source);

    for _ in 0..200 {
        let transaction = KeyPair::generate(&source);
        //Random outputs, and outputs paid to the same spend key under another view key
        let foreign = DerivationSecret::from_sender(transaction.secret(), other_view.public());
        let outputs = vec!(
            OutputRecord{amount: 1, key: *KeyPair::generate(&source).public().as_bytes()},
            OutputRecord{amount: 2, key: *foreign.output_public_key(1, spend.public()).as_bytes()}
        );
        let matches = scan::scan(transaction.public(), &outputs, view.secret(), &[*spend.public()]);
        assert!(matches.is_empty());
    }
}

#[test]
fn deterministic_test() {
    let spend = key_pair(SPEND_SECRET);
    let request = known_request(vec!(
        OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()},
        OutputEntry{amount: 5, key: spend.public().to_hex()}
    ));
    let scan_request = request.validate().unwrap();
    let first = scan_request.execute().unwrap();
    for _ in 0..5 {
        assert_eq!(scan_request.execute().unwrap(), first);
    }
}

#[test]
fn empty_inputs_test() {
    //No outputs
    let request = known_request(vec!());
    assert!(request.validate().unwrap().execute().unwrap().is_empty());

    //No spend keys
    let mut request = known_request(vec!(OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()}));
    request.spend_public_keys.clear();
    assert!(request.validate().unwrap().execute().unwrap().is_empty());
}

#[test]
fn duplicate_spend_keys_test() {
    let spend = key_pair(SPEND_SECRET);
    let mut request = known_request(vec!(OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()}));
    request.spend_public_keys.push(spend.public().to_hex());

    let scan_request = request.validate().unwrap();
    assert_eq!(scan_request.spend_keys.len(), 1);
    assert_eq!(scan_request.execute().unwrap().len(), 1);

    let set: SpendKeySet = [*spend.public().as_bytes(); 4].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn field_length_test() {
    let short = &TX_PUBLIC[..62];
    let long = format!("{}ab", TX_PUBLIC);
    let expect_length = |request: FindOutputsRequest, field: KeyField, actual: usize| {
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::InvalidLength{field, expected: 32, actual}
        );
    };

    let mut request = known_request(vec!());
    request.transaction_public_key = short.to_owned();
    expect_length(request, KeyField::TransactionPublicKey, 31);

    let mut request = known_request(vec!());
    request.view_secret_key = long.clone();
    expect_length(request, KeyField::ViewSecretKey, 33);

    let request = known_request(vec!(
        OutputEntry{amount: 1, key: OUTPUT_KEY.to_owned()},
        OutputEntry{amount: 2, key: OUTPUT_KEY.to_owned()},
        OutputEntry{amount: 3, key: long.clone()}
    ));
    expect_length(request, KeyField::OutputKey(2), 33);

    let mut request = known_request(vec!());
    request.spend_public_keys.push(String::new());
    expect_length(request, KeyField::SpendPublicKey(1), 0);

    let mut request = known_request(vec!());
    request.view_secret_key = "not hex".to_owned();
    assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidHex{field: KeyField::ViewSecretKey});
}

#[test]
fn invalid_key_test() {
    //Right length, but not a usable key
    let mut off_curve = [0u8; 32];
    off_curve[0] = 2;
    let mut identity = [0u8; 32];
    identity[0] = 1;

    let mut request = known_request(vec!(OutputEntry{amount: 1, key: hex::encode(off_curve)}));
    assert_eq!(
        request.validate().unwrap().execute(),
        Err(InvalidKeyError::NotOnCurve(KeyField::OutputKey(0)))
    );

    request.outputs.clear();
    request.transaction_public_key = hex::encode(identity);
    assert_eq!(
        request.validate().unwrap().execute(),
        Err(InvalidKeyError::Identity(KeyField::TransactionPublicKey))
    );

    let mut request = known_request(vec!());
    request.view_secret_key = "ff".repeat(32);
    assert_eq!(
        request.validate().unwrap().execute(),
        Err(InvalidKeyError::NonCanonicalScalar(KeyField::ViewSecretKey))
    );
}

#[test]
fn non_canonical_key_test() {
    //y = 3 + p decodes to the same point as y = 3
    let mut alias = [0xff; 32];
    alias[0] = 0xf0;
    alias[31] = 0x7f;
    let mut canonical = [0u8; 32];
    canonical[0] = 3;

    //As a second spend key, it would alias the first one
    let mut request = known_request(vec!(OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()}));
    request.spend_public_keys = vec!(hex::encode(canonical), hex::encode(alias));
    let scan_request = request.validate().unwrap();
    assert_eq!(scan_request.spend_keys.len(), 2);
    assert_eq!(
        scan_request.execute(),
        Err(InvalidKeyError::NonCanonicalPoint(KeyField::SpendPublicKey(1)))
    );

    //As an output key
    let request = known_request(vec!(
        OutputEntry{amount: OUTPUT_AMOUNT, key: OUTPUT_KEY.to_owned()},
        OutputEntry{amount: 1, key: hex::encode(alias)}
    ));
    assert_eq!(
        request.validate().unwrap().execute(),
        Err(InvalidKeyError::NonCanonicalPoint(KeyField::OutputKey(1)))
    );
}

#[test]
fn repeated_spend_key_test() {
    //Every matching spend key is reported, in order
    let spend = key_pair(SPEND_SECRET);
    let view = key_pair(VIEW_SECRET);
    let tx_public = PublicKey::decode(&bytes(TX_PUBLIC), KeyField::TransactionPublicKey).unwrap();
    let outputs = vec!(
        OutputRecord{amount: OUTPUT_AMOUNT, key: bytes(OUTPUT_KEY)},
        OutputRecord{amount: 1, key: *view.public().as_bytes()}
    );

    let matches = scan::scan(&tx_public, &outputs, view.secret(), &[*spend.public(), *spend.public()]);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|found| found.index == 0 && found.amount == OUTPUT_AMOUNT));
    assert!(matches.iter().all(|found| found.spend_key == *spend.public()));
}
