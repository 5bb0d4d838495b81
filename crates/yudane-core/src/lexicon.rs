//! Phrase pools for oracle generation.
//!
//! An oracle is an absurd excuse followed by a permission. N and R share the
//! everyday pool; SR and SSR each draw from their own, heavier pool.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::rarity::Rarity;

/// Everyday excuses for N and R oracles.
pub const COMMON_EXCUSES: &[&str] = &[
    "気圧がゴミだから、",
    "月曜とかいうバグのせいだし、",
    "Wi-Fi弱いし、",
    "充電15%だし、",
    "空腹は敵だから、",
    "天気アプリが曇りって言ってるし、",
    "今日金曜じゃないし、",
    "通知溜まりすぎだし、",
    "布団が離してくれないから、",
    "コーヒー切れてるし、",
    "エアコンの温度ちょうどよすぎるし、",
    "湿度やばいし、",
    "電車混みすぎだし、",
    "アラーム鳴らなかったし、",
    "夜更かししたの昨日の自分のせいだし、",
    "給料日じゃないし、",
    "服決まらないし、",
    "髪型決まらないし、",
    "メイク乗らないし、",
    "おなか空いてないし、",
    "おなか空きすぎだし、",
    "水曜日まだ終わってないし、",
    "昼飯重かったし、",
    "眠いもんは眠いし、",
    "寒いし、",
    "暑いし、",
    "蒸し暑いし、",
    "花粉飛んでるし、",
    "黄砂来てるし、",
    "低気圧接近中だし、",
    "満月だし、",
    "新月だし、",
    "バイオリズム最悪だし、",
    "血糖値乱高下してるし、",
    "カフェイン切れだし、",
    "寝不足だし、",
    "寝すぎたし、",
    "スマホ重いし、",
    "アプリ落ちるし、",
    "なんか今日そういう日だし、",
];

/// Small, immediate permissions for N and R oracles.
pub const COMMON_PERMISSIONS: &[&str] = &[
    "とりあえず寝ろ。",
    "マック食って忘れろ。",
    "既読無視でOK。",
    "二度寝しろ。",
    "Uber頼め。",
    "コンビニ行け。",
    "アイス食え。",
    "ポテト食え。",
    "返信は明日。",
    "タスク閉じろ。",
    "通知オフれ。",
    "YouTube開け。",
    "推しの動画見ろ。",
    "布団に戻れ。",
    "風呂入らなくていい。",
    "歯磨きサボれ。",
    "外出なくていい。",
    "予定飛ばせ。",
    "ドタキャンでいい。",
    "「体調悪い」で。",
    "課金しろ。",
    "ガチャ回せ。",
    "カフェオレ飲め。",
    "昼寝しろ。",
    "ゲームしろ。",
    "漫画読め。",
    "TikTok見ろ。",
    "Xスクロールしろ。",
    "なんも考えるな。",
    "適当でいい。",
    "雑でいい。",
    "60点でいい。",
    "やらなくていい。",
    "後でいい。",
    "来週でいい。",
    "来月でいい。",
    "明日の自分に任せろ。",
    "バレなきゃセーフ。",
    "誰も見てない。",
    "知らんぷりで。",
];

/// Self-defence excuses for SR oracles.
pub const SR_EXCUSES: &[&str] = &[
    "人間関係とかいう無理ゲーやってるから、",
    "社会が設計ミスってるから、",
    "生存本能が『無理』って言ってるから、",
    "メンタルのHP1だから、",
    "キャパ超えてるから、",
    "頑張りすぎた反動だから、",
    "限界オタクだから、",
    "自己肯定感バグってるから、",
    "ストレスのサブスク払いすぎだから、",
    "他人軸で生きすぎたから、",
];

/// Self-affirming permissions for SR oracles.
pub const SR_PERMISSIONS: &[&str] = &[
    "嫌いな奴はミュート。",
    "合わない奴はブロック。",
    "推しだけ見とけ。",
    "直帰していい。",
    "有給取れ。",
    "泣いていい。",
    "逃げていい。",
    "「無理」って言え。",
    "自分だけは味方しろ。",
    "甘やかせ、自分を。",
];

/// Cosmic excuses for SSR oracles.
pub const SSR_EXCUSES: &[&str] = &[
    "どうせ100年後は全員いないから、",
    "宇宙規模で見たらホコリだから、",
    "DNAレベルで疲れてるから、",
    "地球が回ってるだけで奇跡だから、",
    "生きてるだけでハードモードだから、",
    "人類史的にそういうフェーズだから、",
    "物理法則に従ってるだけだから、",
    "脳が「終わり」って言ってるから、",
    "存在してること自体がバグだから、",
    "時間は幻想だから、",
];

/// Absolute permissions for SSR oracles.
pub const SSR_PERMISSIONS: &[&str] = &[
    "今日は閉店ガラガラ。",
    "存在してるだけで100点。",
    "全部あとまわしで。",
    "何もしなくていい、マジで。",
    "生きてる、それだけでいい。",
    "考えなくていい。",
    "答え出さなくていい。",
    "意味なくていい。",
    "全部許した。",
    "おまえはもう、えらい。",
];

/// Excuse and permission fragments for one tier group.
#[derive(Debug, Clone, Copy)]
pub struct PhrasePool {
    /// First half of an oracle.
    pub excuses: &'static [&'static str],
    /// Second half of an oracle.
    pub permissions: &'static [&'static str],
}

/// Pool shared by N and R.
pub const COMMON_POOL: PhrasePool = PhrasePool {
    excuses: COMMON_EXCUSES,
    permissions: COMMON_PERMISSIONS,
};

/// Pool for SR.
pub const SR_POOL: PhrasePool = PhrasePool {
    excuses: SR_EXCUSES,
    permissions: SR_PERMISSIONS,
};

/// Pool for SSR.
pub const SSR_POOL: PhrasePool = PhrasePool {
    excuses: SSR_EXCUSES,
    permissions: SSR_PERMISSIONS,
};

impl PhrasePool {
    /// The pool a tier draws from.
    pub fn for_rarity(rarity: Rarity) -> Self {
        match rarity {
            Rarity::SuperSuperRare => SSR_POOL,
            Rarity::SuperRare => SR_POOL,
            Rarity::Rare | Rarity::Normal => COMMON_POOL,
        }
    }

    /// Number of distinct messages this pool can produce.
    pub fn combinations(&self) -> usize {
        self.excuses.len() * self.permissions.len()
    }
}

/// Generate an oracle message for a tier.
///
/// The excuse and the permission are separated by a line break so the
/// permission reads as its own line.
pub fn generate_oracle<R: Rng + ?Sized>(rarity: Rarity, rng: &mut R) -> String {
    let pool = PhrasePool::for_rarity(rarity);
    let excuse = pool.excuses.choose(rng).copied().unwrap_or_default();
    let permission = pool.permissions.choose(rng).copied().unwrap_or_default();
    format!("{excuse}\n{permission}")
}
