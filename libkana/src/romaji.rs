//! Hiragana spelling data.
//!
//! Keys are clusters of one to three hiragana (plus a few symbols and
//! full-width digits); values are the accepted romaji in preference order.
//! Half-width ASCII never reaches this table: the graph builder spells it
//! as itself.

use phf::phf_map;

/// The syllabic nasal.
pub const NASAL_CLUSTER: &str = "ん";

/// The nasal's ambiguous one-letter spelling.
pub const NASAL_SHORT: &str = "n";

/// Clusters after which "ん" must be typed with a long spelling ("nn", "xn").
///
/// Any of these would otherwise read as a continuation of a bare "n":
/// n-row kana ("na"), y-row kana ("nya" vs "n" + "ya"), plain vowels, a
/// second "ん", and a literal ASCII "n" passed through from the reading.
pub static CONFIRMATION_REQUIRED: &[&str] = &[
    "な", "に", "ぬ", "ね", "の",
    "にゃ", "にぃ", "にゅ", "にぇ", "にょ",
    "や", "ゆ", "よ", "っや", "っゆ", "っよ",
    "あ", "い", "う", "え", "お",
    "ん", "n",
];

pub static KANA_ROMAJI: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    // Single kana
    "ぁ" => &["la", "xa"],
    "あ" => &["a"],
    "ぃ" => &["li", "xi"],
    "い" => &["i"],
    "ぅ" => &["lu", "xu"],
    "う" => &["u", "wu"],
    "ぇ" => &["le", "xe"],
    "え" => &["e"],
    "ぉ" => &["lo", "xo"],
    "お" => &["o"],
    "か" => &["ka"],
    "が" => &["ga"],
    "き" => &["ki"],
    "ぎ" => &["gi"],
    "く" => &["ku", "qu"],
    "ぐ" => &["gu"],
    "け" => &["ke"],
    "げ" => &["ge"],
    "こ" => &["ko"],
    "ご" => &["go"],
    "さ" => &["sa"],
    "ざ" => &["za"],
    "し" => &["si", "shi"],
    "じ" => &["ji", "zi"],
    "す" => &["su"],
    "ず" => &["zu"],
    "せ" => &["se"],
    "ぜ" => &["ze"],
    "そ" => &["so"],
    "ぞ" => &["zo"],
    "た" => &["ta"],
    "だ" => &["da"],
    "ち" => &["ti", "chi"],
    "ぢ" => &["di"],
    "っ" => &["ltu", "xtu", "ltsu", "xtsu"],
    "つ" => &["tu", "tsu"],
    "づ" => &["du"],
    "て" => &["te"],
    "で" => &["de"],
    "と" => &["to"],
    "ど" => &["do"],
    "な" => &["na"],
    "に" => &["ni"],
    "ぬ" => &["nu"],
    "ね" => &["ne"],
    "の" => &["no"],
    "は" => &["ha"],
    "ば" => &["ba"],
    "ぱ" => &["pa"],
    "ひ" => &["hi"],
    "び" => &["bi"],
    "ぴ" => &["pi"],
    "ふ" => &["hu"],
    "ぶ" => &["bu"],
    "ぷ" => &["pu"],
    "へ" => &["he"],
    "べ" => &["be"],
    "ぺ" => &["pe"],
    "ほ" => &["ho"],
    "ぼ" => &["bo"],
    "ぽ" => &["po"],
    "ま" => &["ma"],
    "み" => &["mi"],
    "む" => &["mu"],
    "め" => &["me"],
    "も" => &["mo"],
    "ゃ" => &["lya", "xya"],
    "や" => &["ya"],
    "ゅ" => &["lyu", "xyu"],
    "ゆ" => &["yu"],
    "ょ" => &["lyo", "xyo"],
    "よ" => &["yo"],
    "ら" => &["ra"],
    "り" => &["ri"],
    "る" => &["ru"],
    "れ" => &["re"],
    "ろ" => &["ro"],
    "ゎ" => &["lwa", "xwa"],
    "わ" => &["wa"],
    "ゐ" => &["wi"],
    "ゑ" => &["we"],
    "を" => &["wo"],
    "ん" => &["n", "nn", "xn"],
    "ゔ" => &["vu"],
    "ゕ" => &["lka", "xka"],
    "ゖ" => &["lke", "xke"],

    // Sokuon + kana
    "っぁ" => &["lla", "xxa"],
    "っぃ" => &["lli", "xxi"],
    "っぅ" => &["llu", "xxu"],
    "っぇ" => &["lle", "xxe"],
    "っぉ" => &["llo", "xxo"],
    "っか" => &["kka"],
    "っが" => &["gga"],
    "っき" => &["kki"],
    "っぎ" => &["ggi"],
    "っく" => &["kku"],
    "っぐ" => &["ggu"],
    "っけ" => &["kke"],
    "っげ" => &["gge"],
    "っこ" => &["kko"],
    "っご" => &["ggo"],
    "っさ" => &["ssa"],
    "っざ" => &["zza"],
    "っし" => &["ssi", "sshi"],
    "っじ" => &["zzi", "jji"],
    "っす" => &["ssu"],
    "っず" => &["zzu"],
    "っせ" => &["sse"],
    "っぜ" => &["zze"],
    "っそ" => &["sso"],
    "っぞ" => &["zzo"],
    "った" => &["tta"],
    "っだ" => &["dda"],
    "っち" => &["tti", "cchi"],
    "っぢ" => &["ddi"],
    "っっ" => &["lltu", "xxtu"],
    "っつ" => &["ttu", "ttsu"],
    "っづ" => &["ddu"],
    "って" => &["tte"],
    "っで" => &["dde"],
    "っと" => &["tto"],
    "っど" => &["ddo"],
    "っは" => &["hha"],
    "っば" => &["bba"],
    "っぱ" => &["ppa"],
    "っひ" => &["hhi"],
    "っび" => &["bbi"],
    "っぴ" => &["ppi"],
    "っふ" => &["hhu"],
    "っぶ" => &["bbu"],
    "っぷ" => &["ppu"],
    "っへ" => &["hhe"],
    "っべ" => &["bbe"],
    "っぺ" => &["ppe"],
    "っほ" => &["hho"],
    "っぼ" => &["bbo"],
    "っぽ" => &["ppo"],
    "っま" => &["mma"],
    "っみ" => &["mmi"],
    "っむ" => &["mmu"],
    "っめ" => &["mme"],
    "っも" => &["mmo"],
    "っゃ" => &["llya", "xxya"],
    "っや" => &["yya"],
    "っゅ" => &["llyu", "xxyu"],
    "っゆ" => &["yyu"],
    "っょ" => &["llyo", "xxyo"],
    "っよ" => &["yyo"],
    "っら" => &["rra"],
    "っり" => &["rri"],
    "っる" => &["rru"],
    "っれ" => &["rre"],
    "っろ" => &["rro"],
    "っゎ" => &["llwa", "xxwa"],
    "っわ" => &["wwa"],
    "っゐ" => &["wwi"],
    "っゑ" => &["wwe"],
    "っを" => &["wwo"],
    "っゔ" => &["vvu"],
    "っゕ" => &["llka", "xxka"],
    "っゖ" => &["llke", "xxke"],

    // Youon
    "きゃ" => &["kya"],
    "きぃ" => &["kyi"],
    "きゅ" => &["kyu"],
    "きぇ" => &["kye"],
    "きょ" => &["kyo"],
    "ぎゃ" => &["gya"],
    "ぎゅ" => &["gyu"],
    "ぎぇ" => &["gye"],
    "ぎょ" => &["gyo"],
    "しゃ" => &["sya", "sha"],
    "しぃ" => &["syi"],
    "しゅ" => &["syu", "shu"],
    "しぇ" => &["sye", "she"],
    "しょ" => &["syo", "sho"],
    "じゃ" => &["zya", "ja", "jya"],
    "じぃ" => &["zyi", "jyi"],
    "じゅ" => &["zyu", "ju", "jyu"],
    "じぇ" => &["zye", "je", "jye"],
    "じょ" => &["zyo", "jo", "jyo"],
    "ちゃ" => &["tya", "cha"],
    "ちぃ" => &["tyi"],
    "ちゅ" => &["tyu", "chu"],
    "ちぇ" => &["tye", "che"],
    "ちょ" => &["tyo", "cho"],
    "ぢゃ" => &["dya"],
    "ぢぃ" => &["dyi"],
    "ぢゅ" => &["dyu"],
    "ぢぇ" => &["dye"],
    "ぢょ" => &["dyo"],
    "にゃ" => &["nya"],
    "にぃ" => &["nyi"],
    "にゅ" => &["nyu"],
    "にぇ" => &["nye"],
    "にょ" => &["nyo"],
    "ひゃ" => &["hya"],
    "ひぃ" => &["hyi"],
    "ひゅ" => &["hyu"],
    "ひぇ" => &["hye"],
    "ひょ" => &["hyo"],
    "びゃ" => &["bya"],
    "びぃ" => &["byi"],
    "びゅ" => &["byu"],
    "びぇ" => &["bye"],
    "びょ" => &["byo"],
    "ぴゃ" => &["pya"],
    "ぴぃ" => &["pyi"],
    "ぴゅ" => &["pyu"],
    "ぴぇ" => &["pye"],
    "ぴょ" => &["pyo"],
    "みゃ" => &["mya"],
    "みぃ" => &["myi"],
    "みゅ" => &["myu"],
    "みぇ" => &["mye"],
    "みょ" => &["myo"],
    "りゃ" => &["rya"],
    "りぃ" => &["ryi"],
    "りゅ" => &["ryu"],
    "りぇ" => &["rye"],
    "りょ" => &["ryo"],

    // Sokuon + youon
    "っきゃ" => &["kkya"],
    "っきぃ" => &["kkyi"],
    "っきゅ" => &["kkyu"],
    "っきぇ" => &["kkye"],
    "っきょ" => &["kkyo"],
    "っぎゃ" => &["ggya"],
    "っぎゅ" => &["ggyu"],
    "っぎぇ" => &["ggye"],
    "っぎょ" => &["ggyo"],
    "っしゃ" => &["ssya", "ssha"],
    "っしぃ" => &["ssyi"],
    "っしゅ" => &["ssyu", "sshu"],
    "っしぇ" => &["ssye", "sshe"],
    "っしょ" => &["ssyo", "ssho"],
    "っじゃ" => &["zzya", "jja", "jjya"],
    "っじぃ" => &["zzyi", "jjyi"],
    "っじゅ" => &["zzyu", "jju", "jjyu"],
    "っじぇ" => &["zzye", "jje", "jjye"],
    "っじょ" => &["zzyo", "jjo", "jjyo"],
    "っちゃ" => &["ttya", "ccha"],
    "っちぃ" => &["ttyi"],
    "っちゅ" => &["ttyu", "cchu"],
    "っちぇ" => &["ttye", "cche"],
    "っちょ" => &["ttyo", "ccho"],
    "っぢゃ" => &["ddya"],
    "っぢぃ" => &["ddyi"],
    "っぢゅ" => &["ddyu"],
    "っぢぇ" => &["ddye"],
    "っぢょ" => &["ddyo"],
    "っひゃ" => &["hhya"],
    "っひぃ" => &["hhyi"],
    "っひゅ" => &["hhyu"],
    "っひぇ" => &["hhye"],
    "っひょ" => &["hhyo"],
    "っびゃ" => &["bbya"],
    "っびぃ" => &["bbyi"],
    "っびゅ" => &["bbyu"],
    "っびぇ" => &["bbye"],
    "っびょ" => &["bbyo"],
    "っぴゃ" => &["ppya"],
    "っぴぃ" => &["ppyi"],
    "っぴゅ" => &["ppyu"],
    "っぴぇ" => &["ppye"],
    "っぴょ" => &["ppyo"],
    "っみゃ" => &["mmya"],
    "っみぃ" => &["mmyi"],
    "っみゅ" => &["mmyu"],
    "っみぇ" => &["mmye"],
    "っみょ" => &["mmyo"],
    "っりゃ" => &["rrya"],
    "っりぃ" => &["rryi"],
    "っりゅ" => &["rryu"],
    "っりぇ" => &["rrye"],
    "っりょ" => &["rryo"],

    // Foreign-sound clusters
    "くぁ" => &["qa", "qwa"],
    "くぃ" => &["qi", "qwi"],
    "くぅ" => &["qwu"],
    "くぇ" => &["qe", "qwe"],
    "くぉ" => &["qo", "qwo"],
    "ぐぁ" => &["gwa"],
    "ぐぃ" => &["gwi"],
    "ぐぅ" => &["gwu"],
    "ぐぇ" => &["gwe"],
    "ぐぉ" => &["gwo"],
    "つぁ" => &["tsa"],
    "つぃ" => &["tsi"],
    "つぇ" => &["tse"],
    "つぉ" => &["tso"],
    "てゃ" => &["tha"],
    "てぃ" => &["thi"],
    "てゅ" => &["thu"],
    "てぇ" => &["the"],
    "てょ" => &["tho"],
    "でゃ" => &["dha"],
    "でぃ" => &["dhi"],
    "でゅ" => &["dhu"],
    "でぇ" => &["dhe"],
    "でょ" => &["dho"],
    "とぁ" => &["twa"],
    "とぃ" => &["twi"],
    "とぅ" => &["twu"],
    "とぇ" => &["twe"],
    "とぉ" => &["two"],
    "どぁ" => &["dwa"],
    "どぃ" => &["dwi"],
    "どぅ" => &["dwu"],
    "どぇ" => &["dwe"],
    "どぉ" => &["dwo"],
    "ふぁ" => &["fa"],
    "ふぃ" => &["fi"],
    "ふぇ" => &["fe"],
    "ふぉ" => &["fo"],
    "ふゃ" => &["fya"],
    "ふゅ" => &["fyu"],
    "ふょ" => &["fyo"],

    // Sokuon + foreign-sound clusters
    "っくぁ" => &["qqa", "qqwa"],
    "っくぃ" => &["qqi", "qqwi"],
    "っくぅ" => &["qqwu"],
    "っくぇ" => &["qqe", "qqwe"],
    "っくぉ" => &["qqo", "qqwo"],
    "っぐぁ" => &["ggwa"],
    "っぐぃ" => &["ggwi"],
    "っぐぅ" => &["ggwu"],
    "っぐぇ" => &["ggwe"],
    "っぐぉ" => &["ggwo"],
    "っつぁ" => &["ttsa"],
    "っつぃ" => &["ttsi"],
    "っつぇ" => &["ttse"],
    "っつぉ" => &["ttso"],
    "ってゃ" => &["ttha"],
    "ってぃ" => &["tthi"],
    "ってゅ" => &["tthu"],
    "ってぇ" => &["tthe"],
    "ってょ" => &["ttho"],
    "っでゃ" => &["ddha"],
    "っでぃ" => &["ddhi"],
    "っでゅ" => &["ddhu"],
    "っでぇ" => &["ddhe"],
    "っでょ" => &["ddho"],
    "っとぁ" => &["ttwa"],
    "っとぃ" => &["ttwi"],
    "っとぅ" => &["ttwu"],
    "っとぇ" => &["ttwe"],
    "っとぉ" => &["ttwo"],
    "っどぁ" => &["ddwa"],
    "っどぃ" => &["ddwi"],
    "っどぅ" => &["ddwu"],
    "っどぇ" => &["ddwe"],
    "っどぉ" => &["ddwo"],
    "っふぁ" => &["ffa"],
    "っふぃ" => &["ffi"],
    "っふぇ" => &["ffe"],
    "っふぉ" => &["ffo"],
    "っふゃ" => &["ffya"],
    "っふゅ" => &["ffyu"],
    "っふょ" => &["ffyo"],

    // Symbols, full-width space and digits
    "ー" => &["-"],
    "・" => &["/"],
    " " => &[" "],
    "　" => &[" "],
    "0" => &["0"],
    "1" => &["1"],
    "2" => &["2"],
    "3" => &["3"],
    "4" => &["4"],
    "5" => &["5"],
    "6" => &["6"],
    "7" => &["7"],
    "8" => &["8"],
    "9" => &["9"],
    "０" => &["0"],
    "１" => &["1"],
    "２" => &["2"],
    "３" => &["3"],
    "４" => &["4"],
    "５" => &["5"],
    "６" => &["6"],
    "７" => &["7"],
    "８" => &["8"],
    "９" => &["9"],
};
