use super::*;

#[test]
fn test_from_bytes_requires_dict_root() {
    assert!(Metainfo::from_bytes(b"d4:infodee").is_ok());
    assert!(matches!(
        Metainfo::from_bytes(b"i42e"),
        Err(MetainfoError::RootNotDictionary)
    ));
    assert!(matches!(
        Metainfo::from_bytes(b"l4:infoe"),
        Err(MetainfoError::RootNotDictionary)
    ));
}

#[test]
fn test_from_bytes_rejects_invalid_bencode() {
    assert!(matches!(
        Metainfo::from_bytes(b"d4:info"),
        Err(MetainfoError::Bencode(_))
    ));
}

#[test]
fn test_info_missing_or_wrong_type() {
    let metainfo = Metainfo::from_bytes(b"d3:fooi1ee").unwrap();
    assert!(matches!(metainfo.info(), Err(MetainfoError::MissingInfo)));
    assert!(matches!(
        metainfo.info_hash(),
        Err(MetainfoError::MissingInfo)
    ));

    let metainfo = Metainfo::from_bytes(b"d4:infoi42ee").unwrap();
    assert!(matches!(
        metainfo.info(),
        Err(MetainfoError::InfoNotDictionary)
    ));
}

#[test]
fn test_info_bytes_are_canonical_encoding() {
    let data = b"d8:announce15:http://test.com4:infod3:cow3:moo4:spam4:eggsee";
    let metainfo = Metainfo::from_bytes(data).unwrap();
    assert_eq!(metainfo.info_bytes().unwrap(), b"d3:cow3:moo4:spam4:eggse");
    assert_eq!(metainfo.raw().as_ref(), data.as_slice());
}

#[test]
fn test_info_hash_known_digest() {
    // SHA-1 of "d3:cow3:moo4:spam4:eggse".
    let metainfo = Metainfo::from_bytes(b"d4:infod3:cow3:moo4:spam4:eggsee").unwrap();
    assert_eq!(
        metainfo.info_hash().unwrap().to_hex(),
        "d2c751227762e1a96a62baa71868456a3260f3db"
    );

    // SHA-1 of "de".
    let metainfo = Metainfo::from_bytes(b"d4:infodee").unwrap();
    assert_eq!(
        metainfo.info_hash().unwrap().to_hex(),
        "600ccd1b71569232d01d110bc63e906beab04d8c"
    );

    // SHA-1 of a single-file style info dictionary.
    let metainfo = Metainfo::from_bytes(
        b"d4:infod6:lengthi1024e4:name11:example.txt12:piece lengthi16384eee",
    )
    .unwrap();
    assert_eq!(
        metainfo.info_hash().unwrap().to_hex(),
        "5c7e88da84c5209783a82248678d74f4287455a2"
    );
}

#[test]
fn test_info_hash_ignores_source_key_order() {
    // The same info entries with keys unsorted in the raw document hash
    // identically, because the digest runs over the canonical re-encoding.
    let sorted = Metainfo::from_bytes(b"d4:infod3:cow3:moo4:spam4:eggsee").unwrap();
    let unsorted = Metainfo::from_bytes(b"d4:infod4:spam4:eggs3:cow3:mooee").unwrap();
    assert_eq!(
        sorted.info_hash().unwrap(),
        unsorted.info_hash().unwrap()
    );
}

#[test]
fn test_info_hash_hex_roundtrip() {
    let metainfo = Metainfo::from_bytes(b"d4:infodee").unwrap();
    let hash = metainfo.info_hash().unwrap();
    assert_eq!(InfoHash::from_hex(&hash.to_hex()).unwrap(), hash);
    assert_eq!(format!("{}", hash), hash.to_hex());
}

#[test]
fn test_info_hash_from_bytes_length() {
    assert!(InfoHash::from_bytes(&[0u8; 20]).is_ok());
    assert!(InfoHash::from_bytes(&[0u8; 19]).is_err());
    assert!(InfoHash::from_hex("abc").is_err());
    assert!(InfoHash::from_hex("zz").is_err());
}
