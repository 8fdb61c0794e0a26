//! Minimal sfnt builder for tests: head, hhea, maxp and name tables only.

pub struct TestFont {
    pub family: String,
    pub subfamily: String,
    pub full_name: Option<String>,
    pub postscript_name: Option<String>,
    pub typographic_family: Option<String>,
}

impl TestFont {
    pub fn new(family: &str, subfamily: &str, postscript_name: &str) -> Self {
        Self {
            family: family.to_string(),
            subfamily: subfamily.to_string(),
            full_name: Some(format!("{} {}", family, subfamily)),
            postscript_name: Some(postscript_name.to_string()),
            typographic_family: None,
        }
    }
}

pub fn build_font(font: &TestFont) -> Vec<u8> {
    // Tags must stay sorted
    let tables: Vec<(&[u8; 4], Vec<u8>)> = vec![
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"maxp", maxp_table()),
        (b"name", name_table(font)),
    ];

    let header_len = 12 + 16 * tables.len();
    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    out.extend_from_slice(&64u16.to_be_bytes());
    out.extend_from_slice(&2u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());

    let mut offset = header_len;
    for (tag, data) in &tables {
        out.extend_from_slice(&tag[..]);
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        offset += padded(data.len());
    }
    for (_, data) in &tables {
        out.extend_from_slice(data);
        out.resize(out.len() + padded(data.len()) - data.len(), 0);
    }
    out
}

fn padded(len: usize) -> usize {
    (len + 3) & !3
}

fn head_table() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
    t.extend_from_slice(&0u32.to_be_bytes()); // checksumAdjustment
    t.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magic
    t.extend_from_slice(&0u16.to_be_bytes()); // flags
    t.extend_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    t.extend_from_slice(&0u64.to_be_bytes()); // created
    t.extend_from_slice(&0u64.to_be_bytes()); // modified
    for _ in 0..4 {
        t.extend_from_slice(&0i16.to_be_bytes()); // bbox
    }
    t.extend_from_slice(&0u16.to_be_bytes()); // macStyle
    t.extend_from_slice(&8u16.to_be_bytes()); // lowestRecPPEM
    t.extend_from_slice(&2i16.to_be_bytes()); // fontDirectionHint
    t.extend_from_slice(&0i16.to_be_bytes()); // indexToLocFormat
    t.extend_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    t.extend_from_slice(&800i16.to_be_bytes()); // ascender
    t.extend_from_slice(&(-200i16).to_be_bytes()); // descender
    t.extend_from_slice(&0i16.to_be_bytes()); // lineGap
    t.extend_from_slice(&500u16.to_be_bytes()); // advanceWidthMax
    for _ in 0..6 {
        t.extend_from_slice(&0i16.to_be_bytes());
    }
    for _ in 0..4 {
        t.extend_from_slice(&0i16.to_be_bytes()); // reserved
    }
    t.extend_from_slice(&0i16.to_be_bytes()); // metricDataFormat
    t.extend_from_slice(&1u16.to_be_bytes()); // numberOfHMetrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    t.extend_from_slice(&1u16.to_be_bytes());
    t
}

fn name_table(font: &TestFont) -> Vec<u8> {
    let mut entries: Vec<(u16, &str)> = vec![(1, font.family.as_str()), (2, font.subfamily.as_str())];
    if let Some(full) = &font.full_name {
        entries.push((4, full.as_str()));
    }
    if let Some(ps) = &font.postscript_name {
        entries.push((6, ps.as_str()));
    }
    if let Some(typo) = &font.typographic_family {
        entries.push((16, typo.as_str()));
    }

    let mut records = Vec::new();
    let mut storage = Vec::new();
    for (id, value) in &entries {
        let encoded: Vec<u8> = value.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        records.extend_from_slice(&3u16.to_be_bytes()); // Windows
        records.extend_from_slice(&1u16.to_be_bytes()); // Unicode BMP
        records.extend_from_slice(&0x0409u16.to_be_bytes());
        records.extend_from_slice(&id.to_be_bytes());
        records.extend_from_slice(&(encoded.len() as u16).to_be_bytes());
        records.extend_from_slice(&(storage.len() as u16).to_be_bytes());
        storage.extend_from_slice(&encoded);
    }

    let mut t = Vec::new();
    t.extend_from_slice(&0u16.to_be_bytes());
    t.extend_from_slice(&(entries.len() as u16).to_be_bytes());
    t.extend_from_slice(&((6 + records.len()) as u16).to_be_bytes());
    t.extend_from_slice(&records);
    t.extend_from_slice(&storage);
    t
}
