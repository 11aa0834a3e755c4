use super::*;

#[test]
fn test_sokuon_doubles_consonant() {
    assert_eq!(both_scripts("っか").unwrap(), "kka");
    assert_eq!(both_scripts("っち").unwrap(), "tchi");
    assert_eq!(both_scripts("っん").unwrap(), "nn");
    assert_eq!(both_scripts("がっこう").unwrap(), "gakkou");
    assert_eq!(both_scripts("きって").unwrap(), "kitte");
    assert_eq!(both_scripts("ざっし").unwrap(), "zasshi");
    assert_eq!(both_scripts("まっちゃ").unwrap(), "matcha");
    assert_eq!(both_scripts("っっか").unwrap(), "kka");
}

#[test]
fn test_sokuon_before_vowel() {
    for input in ["っあ", "かっい", "ッウ", "っ・え", "ッオ"] {
        assert_eq!(
            transliterate(input),
            Err(KanaError::SokuonBeforeVowel),
            "{input}"
        );
    }
    assert_eq!(
        KanaError::SokuonBeforeVowel.to_string(),
        "sokuon cannot precede a vowel"
    );
}

#[test]
fn test_trailing_sokuon_dropped() {
    assert_eq!(transliterate("っ").unwrap(), "");
    assert_eq!(transliterate("かっ").unwrap(), "ka");
    assert_eq!(transliterate("えっ・").unwrap(), "e");
}

#[test]
fn test_trailing_sokuon_rejected() {
    let reject = Options {
        trailing_sokuon: TrailingSokuon::Reject,
        ..Options::default()
    };
    assert_eq!(
        transliterate_with("かっ".as_bytes(), &reject),
        Err(KanaError::TrailingSokuon)
    );
    assert_eq!(
        transliterate_with("かった".as_bytes(), &reject).unwrap(),
        "katta"
    );
}

#[test]
fn test_youon_row() {
    assert_eq!(both_scripts("きゃ").unwrap(), "kya");
    assert_eq!(both_scripts("しゃ").unwrap(), "sha");
    assert_eq!(both_scripts("ちょっと").unwrap(), "chotto");
    assert_eq!(both_scripts("じゅう").unwrap(), "juu");
    assert_eq!(both_scripts("ぴょん").unwrap(), "pyon");
    assert_eq!(both_scripts("りゅう").unwrap(), "ryuu");
    assert_eq!(both_scripts("でゅ").unwrap(), "dyu");
    assert_eq!(both_scripts("っきゃ").unwrap(), "kkya");
}

#[test]
fn test_youon_first_character() {
    let inputs = [
        "ゃき", "ゅき", "ょき", "ぁき", "ぃき", "ぅき", "ぇき", "ぉき", "ゎき", "ャキ", "ュキ",
        "ョキ", "ァキ", "ィキ", "ゥキ", "ェキ", "ォキ", "ヮキ",
    ];
    for input in inputs {
        let (romaji, err) = kana_to_romaji(input);
        assert_eq!(romaji, "");
        assert_eq!(err, Some(KanaError::YouonFirstCharacter), "{input}");
    }
    assert_eq!(
        KanaError::YouonFirstCharacter.to_string(),
        "yōon cannot be the first character in a kana block"
    );
    // A separator or a sokuon does not provide a syllable.
    assert_eq!(transliterate("・ゃ"), Err(KanaError::YouonFirstCharacter));
    assert_eq!(transliterate("っゃ"), Err(KanaError::YouonFirstCharacter));
}

#[test]
fn test_youon_unrecognised_combination() {
    assert_eq!(
        transliterate("んゃ"),
        Err(KanaError::UnrecognisedYouonCombination)
    );
    assert_eq!(
        transliterate("やょ"),
        Err(KanaError::UnrecognisedYouonCombination)
    );
    assert_eq!(
        transliterate("ゐぃ"),
        Err(KanaError::UnrecognisedYouonCombination)
    );
    assert_eq!(
        KanaError::UnrecognisedYouonCombination.to_string(),
        "unrecognised yōon combination"
    );
}

#[test]
fn test_youon_unrecognised_syllable() {
    let mut machine = Transliterator::new();
    machine.push_unit(Unit::Syllable("nn")).unwrap();
    assert_eq!(
        machine.push_char('ぁ'),
        Err(KanaError::UnrecognisedYouonSyllable)
    );
    assert_eq!(
        KanaError::UnrecognisedYouonSyllable.to_string(),
        "unrecognised yōon syllable"
    );
}

#[test]
fn test_youon_special() {
    assert_eq!(both_scripts("くぁ").unwrap(), "kwa");
    assert_eq!(both_scripts("くゎ").unwrap(), "kwa");
    assert_eq!(both_scripts("ぐぁ").unwrap(), "gwa");
    assert_eq!(both_scripts("くぅ").unwrap(), "ku");
    assert_eq!(both_scripts("くぇ").unwrap(), "ke");
    assert_eq!(both_scripts("ぐぅ").unwrap(), "gu");
    assert_eq!(both_scripts("つぁ").unwrap(), "tsa");
    assert_eq!(both_scripts("いぇ").unwrap(), "ye");
    assert_eq!(both_scripts("うぇ").unwrap(), "we");
    assert_eq!(both_scripts("ふぁ").unwrap(), "fa");
    assert_eq!(both_scripts("ゔぁ").unwrap(), "va");
    assert_eq!(both_scripts("てぃ").unwrap(), "ti");
    assert_eq!(both_scripts("きぃ").unwrap(), "kyi");
    assert_eq!(both_scripts("しぇ").unwrap(), "she");
}

#[test]
fn test_youon_special_unrecognised_vowel() {
    for input in ["あぃ", "えぁ", "おぅ", "んぇ"] {
        assert_eq!(
            transliterate(input),
            Err(KanaError::UnrecognisedYouonVowel),
            "{input}"
        );
    }
    assert_eq!(
        KanaError::UnrecognisedYouonVowel.to_string(),
        "unrecognised yōon vowel"
    );
}

#[test]
fn test_chouonpu() {
    assert_eq!(transliterate("アー").unwrap(), "aa");
    assert_eq!(transliterate("カーカ").unwrap(), "kaaka");
    assert_eq!(transliterate("ラーメン").unwrap(), "raamen");
    assert_eq!(transliterate("コーヒー").unwrap(), "koohii");
    assert_eq!(transliterate("シャーク").unwrap(), "shaaku");
    assert_eq!(transliterate("ふー").unwrap(), "fuu");
    assert_eq!(transliterate("かっー・た").unwrap(), "kaatta");
    assert_eq!(transliterate("きーゃ").unwrap(), "kiya");
}

#[test]
fn test_chouonpu_errors() {
    assert_eq!(transliterate("ー"), Err(KanaError::ChouonpuFirstCharacter));
    assert_eq!(transliterate("ーア"), Err(KanaError::ChouonpuFirstCharacter));
    assert_eq!(transliterate("んー"), Err(KanaError::ChouonpuConsonant));
    assert_eq!(transliterate("アンー"), Err(KanaError::ChouonpuConsonant));
    assert_eq!(
        KanaError::ChouonpuFirstCharacter.to_string(),
        "chōonpu cannot be the first character in a block"
    );
    assert_eq!(
        KanaError::ChouonpuConsonant.to_string(),
        "chōonpu cannot extend a consonant"
    );
}

#[test]
fn test_loanwords() {
    assert_eq!(transliterate("パーティー").unwrap(), "paatii");
    assert_eq!(transliterate("ウィキペディア").unwrap(), "wikipedia");
    assert_eq!(transliterate("チェック").unwrap(), "chekku");
    assert_eq!(transliterate("フォーク").unwrap(), "fooku");
    assert_eq!(transliterate("コンピューター").unwrap(), "konpyuutaa");
}
