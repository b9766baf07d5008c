//! Built-in gesture templates.
//!
//! Raw point tables recorded once with a pointer device. They are normalized
//! when a recognizer is constructed, like any user-added template.

use crate::geometry::Point;

/// Number of built-in templates.
pub const BUILTIN_COUNT: usize = 5;

/// Built-in template names and raw strokes, in library order.
pub(crate) const BUILTINS: [(&str, &[[f64; 2]]); BUILTIN_COUNT] = [
    ("good", GOOD),
    ("check", CHECK),
    ("zig-zag", ZIG_ZAG),
    ("arrow", ARROW),
    ("heart", HEART),
];

/// Raw points of a built-in template, or `None` for an unknown name.
pub fn builtin_points(name: &str) -> Option<Vec<Point>> {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, raw)| raw.iter().copied().map(Point::from).collect())
}

#[rustfmt::skip]
const GOOD: &[[f64; 2]] = &[
    [108.0, 167.0], [106.0, 169.0], [104.0, 170.0], [102.83762075481009, 171.1623792451899],
    [102.0, 172.0], [100.0, 175.0], [98.84906698697624, 176.53457735069836], [97.0, 179.0],
    [96.0, 181.0], [95.37814891126769, 182.24370217746463], [93.0, 187.0],
    [92.37808466325885, 188.2438306734823], [91.0, 191.0], [90.12035806526917, 194.51856773892328],
    [90.0, 195.0], [87.22186505869975, 200.5562698826005], [87.0, 201.0], [86.0, 207.0],
    [85.96859655711286, 207.12561377154853], [84.34158328009802, 213.63366687960792], [83.0, 219.0],
    [82.80652573232213, 220.1608456060672], [82.0, 225.0], [81.64651182716221, 226.76744086418896],
    [80.33089662358597, 233.34551688207011], [80.0, 235.0], [79.44551234672274, 239.99038887949544],
    [79.0, 244.0], [79.0, 246.67406171204482], [79.0, 250.0], [79.0, 253.38240930745937],
    [79.0, 258.0], [79.0, 260.0907569028739], [79.0, 264.0], [79.30910938138896, 266.7819844325007],
    [80.0, 273.0], [80.14295612344854, 273.42886837034564], [82.0, 279.0],
    [82.31043032500547, 279.7760758125137], [84.0, 284.0], [84.85048831769727, 285.98447274129364],
    [87.0, 291.0], [87.64395138103293, 292.07325230172154], [90.0, 296.0],
    [91.36296040292474, 297.6355524835097], [95.0, 302.0], [95.52844380149621, 302.88073966916033],
    [98.0, 307.0], [99.5846446356878, 308.0564297571252], [101.0, 309.0],
    [104.9100460676666, 312.12803685413326], [106.0, 313.0], [110.0, 316.0],
    [110.2679884114024, 316.16079304684143], [115.0, 319.0],
    [116.02034901769113, 319.6122094106147], [120.0, 322.0],
    [121.98777471458861, 322.5679356327396], [127.0, 324.0],
    [128.33766471267785, 324.66883235633895], [133.0, 327.0],
    [134.46665282732613, 327.2933305654652], [138.0, 328.0], [141.10502635906215, 328.0],
    [147.0, 328.0], [147.8133739544767, 328.0], [151.0, 328.0],
    [154.49452638190286, 327.56318420226216], [159.0, 327.0],
    [161.13831599002202, 326.643614001663], [165.0, 326.0], [167.32424634851222, 324.4505024343252],
    [168.0, 324.0], [172.9999614792859, 320.8750240754463], [176.0, 319.0],
    [178.83583439979063, 317.5820828001047], [180.0, 317.0],
    [184.39967044095982, 313.85737825645725], [187.0, 312.0],
    [188.94854708522593, 309.07717937216114], [189.0, 309.0], [194.0, 305.0],
    [194.15023565208932, 304.8497643479107], [198.0, 301.0],
    [198.7583751855953, 299.98883308587295], [201.0, 297.0], [202.5292389433195, 294.4512684278008],
    [204.0, 292.0], [205.0, 290.0], [205.5102758627011, 288.4691724118967], [207.0, 284.0],
    [207.3917275136712, 282.041362431644], [208.0, 279.0], [209.0, 276.0],
    [209.0, 275.555523342126], [209.0, 272.0], [209.0, 270.0], [209.0, 268.84717574671146],
    [209.0, 266.0], [208.0635282723021, 262.25411308920843], [208.0, 262.0], [207.0, 260.0],
    [205.43631681042626, 256.0907920260656], [205.0, 255.0], [204.0, 251.0],
    [203.55398508441303, 249.66195525323909], [203.0, 248.0], [201.0, 245.0],
    [200.25063239419836, 243.87594859129754], [199.0, 242.0], [197.0, 240.0],
    [195.85073167031308, 238.85073167031308], [195.0, 238.0], [192.0, 236.0],
    [190.65672335183538, 234.65672335183538], [189.0, 233.0],
    [185.507690430281, 230.38076782271077], [185.0, 230.0], [181.0, 229.0],
    [179.2553044437167, 228.12765222185834], [179.0, 228.0], [173.0, 226.0],
    [172.90458335201257, 225.97614583800313], [169.0, 225.0], [167.0, 225.0],
    [166.31640480067946, 225.0], [163.0, 225.0], [159.9661541340727, 226.51692293296367],
    [157.0, 228.0], [153.85052679060416, 229.25978928375832], [152.0, 230.0], [150.0, 231.0],
    [148.24693997116648, 232.75306002883352], [146.0, 235.0],
    [143.0622845069108, 236.9584769953928], [143.0, 237.0], [141.0, 239.0], [139.0, 242.0],
    [138.9369085970514, 242.18927420884583], [138.0, 245.0], [137.0, 248.0],
    [137.0, 248.58330480917087], [137.0, 250.0], [137.0, 253.0], [137.0, 254.0],
    [137.0, 255.29165240458542], [137.0, 256.0], [137.0, 257.0], [137.0, 257.0], [137.0, 258.0],
    [137.0, 259.0], [137.0, 259.0], [137.0, 260.0], [138.0, 260.0], [138.0, 260.0],
    [138.0, 260.99999999999994], [138.0, 261.0], [138.0, 261.0],
];

#[rustfmt::skip]
const CHECK: &[[f64; 2]] = &[
    [91.0, 185.0], [93.0, 185.0], [95.0, 185.0], [97.0, 185.0], [100.0, 188.0], [102.0, 189.0],
    [104.0, 190.0], [106.0, 193.0], [108.0, 195.0], [110.0, 198.0], [112.0, 201.0], [114.0, 204.0],
    [115.0, 207.0], [117.0, 210.0], [118.0, 212.0], [120.0, 214.0], [121.0, 217.0], [122.0, 219.0],
    [123.0, 222.0], [124.0, 224.0], [126.0, 226.0], [127.0, 229.0], [129.0, 231.0], [130.0, 233.0],
    [129.0, 231.0], [129.0, 228.0], [129.0, 226.0], [129.0, 224.0], [129.0, 221.0], [129.0, 218.0],
    [129.0, 212.0], [129.0, 208.0], [130.0, 198.0], [132.0, 189.0], [134.0, 182.0], [137.0, 173.0],
    [143.0, 164.0], [147.0, 157.0], [151.0, 151.0], [155.0, 144.0], [161.0, 137.0], [165.0, 131.0],
    [171.0, 122.0], [174.0, 118.0], [176.0, 114.0], [177.0, 112.0], [177.0, 114.0], [175.0, 116.0],
    [173.0, 118.0],
];

#[rustfmt::skip]
const ZIG_ZAG: &[[f64; 2]] = &[
    [307.0, 216.0], [333.0, 186.0], [356.0, 215.0], [375.0, 186.0], [399.0, 216.0], [418.0, 186.0],
];

#[rustfmt::skip]
const ARROW: &[[f64; 2]] = &[
    [68.0, 222.0], [70.0, 220.0], [73.0, 218.0], [75.0, 217.0], [77.0, 215.0], [80.0, 213.0],
    [82.0, 212.0], [84.0, 210.0], [87.0, 209.0], [89.0, 208.0], [92.0, 206.0], [95.0, 204.0],
    [101.0, 201.0], [106.0, 198.0], [112.0, 194.0], [118.0, 191.0], [124.0, 187.0], [127.0, 186.0],
    [132.0, 183.0], [138.0, 181.0], [141.0, 180.0], [146.0, 178.0], [154.0, 173.0], [159.0, 171.0],
    [161.0, 170.0], [166.0, 167.0], [168.0, 167.0], [171.0, 166.0], [174.0, 164.0], [177.0, 162.0],
    [180.0, 160.0], [182.0, 158.0], [183.0, 156.0], [181.0, 154.0], [178.0, 153.0], [171.0, 153.0],
    [164.0, 153.0], [160.0, 153.0], [150.0, 154.0], [147.0, 155.0], [141.0, 157.0], [137.0, 158.0],
    [135.0, 158.0], [137.0, 158.0], [140.0, 157.0], [143.0, 156.0], [151.0, 154.0], [160.0, 152.0],
    [170.0, 149.0], [179.0, 147.0], [185.0, 145.0], [192.0, 144.0], [196.0, 144.0], [198.0, 144.0],
    [200.0, 144.0], [201.0, 147.0], [199.0, 149.0], [194.0, 157.0], [191.0, 160.0], [186.0, 167.0],
    [180.0, 176.0], [177.0, 179.0], [171.0, 187.0], [169.0, 189.0], [165.0, 194.0], [164.0, 196.0],
];

#[rustfmt::skip]
const HEART: &[[f64; 2]] = &[
    [131.0, 129.0], [131.0, 129.0], [131.0, 129.0], [131.0, 129.0], [131.0, 128.0], [131.0, 127.0],
    [131.0, 126.0], [131.0, 122.0], [131.0, 121.56505939107251], [131.0, 121.56505939107251],
    [131.0, 119.0], [130.0, 115.0], [130.0, 114.25322440776267], [130.0, 114.25322440776267],
    [130.0, 114.0], [129.0, 111.0], [129.0, 109.0], [128.60395551819067, 107.01977759095342],
    [128.60395551819067, 107.01977759095342], [128.0, 104.0], [128.0, 104.0], [127.0, 103.0],
    [127.0, 101.0], [127.0, 101.0], [126.33450922901716, 100.33450922901716],
    [126.33450922901716, 100.33450922901716], [126.0, 100.0], [126.0, 99.0], [125.0, 96.0],
    [124.0, 94.0], [123.60152589549581, 93.60152589549581], [123.60152589549581, 93.60152589549581],
    [123.0, 93.0], [122.0, 92.0], [122.0, 91.0], [121.0, 90.0], [120.0, 89.0], [120.0, 88.0],
    [119.75844253557703, 87.75844253557703], [119.75844253557703, 87.75844253557703], [119.0, 87.0],
    [119.0, 87.0], [117.0, 86.0], [117.0, 85.0], [116.0, 85.0], [116.0, 85.0], [115.0, 84.0],
    [114.28794065103907, 84.0], [114.28794065103907, 84.0], [114.0, 84.0], [113.0, 83.0],
    [112.0, 83.0], [111.0, 83.0], [110.0, 83.0], [110.0, 83.0], [109.0, 83.0], [108.0, 83.0],
    [107.26721360448467, 83.0], [107.26721360448467, 83.0], [107.0, 83.0], [105.0, 83.0],
    [102.0, 83.0], [101.0, 84.0], [100.24648655793027, 84.0], [100.24648655793027, 84.0],
    [98.0, 84.0], [96.0, 85.0], [95.0, 85.0], [94.0, 85.0], [93.04761392650256, 85.0],
    [93.04761392650256, 85.0], [93.0, 85.0], [92.0, 85.0], [92.0, 86.0], [90.0, 86.0], [90.0, 86.0],
    [90.0, 86.0], [89.0, 86.0], [89.0, 86.0], [88.0, 87.0], [87.02688687994817, 87.0],
    [87.02688687994817, 87.0], [87.0, 87.0], [87.0, 87.0], [84.0, 88.0], [83.0, 89.0], [83.0, 89.0],
    [82.0, 90.0], [81.0, 90.0], [81.0, 90.41734894406476], [81.0, 90.41734894406476], [81.0, 91.0],
    [80.0, 91.0], [80.0, 91.0], [79.0, 91.0], [79.0, 92.0], [78.0, 92.0], [78.0, 93.0],
    [77.0, 93.0], [77.0, 93.0], [77.0, 93.85228955299225], [77.0, 93.85228955299225], [77.0, 94.0],
    [77.0, 94.0], [76.0, 95.0], [76.0, 95.0], [76.0, 96.0], [74.0, 97.0], [74.0, 98.0],
    [73.0, 99.0], [73.0, 99.0], [72.84250252889669, 99.15749747110331],
    [72.84250252889669, 99.15749747110331], [72.0, 100.0], [72.0, 101.0], [71.0, 103.0],
    [71.0, 106.0], [71.0, 106.00739412872838], [71.0, 106.00739412872838], [71.0, 108.0],
    [70.0, 112.0], [70.0, 113.0], [70.0, 113.31922911203822], [70.0, 113.31922911203822],
    [70.0, 117.0], [69.0, 120.0], [69.0, 120.59189206079733], [69.0, 120.59189206079733],
    [69.0, 123.0], [69.0, 125.0], [70.0, 127.0], [70.0, 127.79076469222504],
    [70.0, 127.79076469222504], [70.0, 128.0], [71.0, 131.0], [71.0, 132.0], [72.0, 134.0],
    [72.20066419311303, 134.8026567724521], [72.20066419311303, 134.8026567724521], [73.0, 138.0],
    [74.53725829943419, 141.84314574858544], [74.53725829943419, 141.84314574858544], [75.0, 143.0],
    [76.0, 145.0], [76.0, 148.95290247108738], [76.0, 148.95290247108738], [76.0, 149.0],
    [77.0, 150.0], [78.0, 152.0], [80.0, 155.0], [80.07322611972063, 155.10983917958094],
    [80.07322611972063, 155.10983917958094], [82.0, 158.0], [84.0, 160.0],
    [84.42077541318487, 161.05193853296217], [84.42077541318487, 161.05193853296217], [86.0, 165.0],
    [88.25054288819544, 167.25054288819544], [88.25054288819544, 167.25054288819544], [89.0, 168.0],
    [90.0, 171.0], [92.0, 173.0], [92.17188359922389, 173.34376719844778],
    [92.17188359922389, 173.34376719844778], [95.0, 179.0], [95.78565226502683, 179.7856522650268],
    [95.78565226502683, 179.7856522650268], [98.0, 182.0], [100.0, 185.0],
    [100.58062860423291, 185.38708573615529], [100.58062860423291, 185.38708573615529],
    [103.0, 187.0], [104.0, 188.0], [106.59017631544633, 189.72678421029755],
    [106.59017631544633, 189.72678421029755], [107.0, 190.0], [109.0, 191.0], [110.0, 192.0],
    [111.0, 193.0], [111.0, 193.0], [112.0, 194.0], [112.46368517478913, 194.0],
    [112.46368517478913, 194.0], [113.0, 194.0], [113.0, 194.0], [115.0, 195.0], [115.0, 196.0],
    [115.0, 196.0], [116.0, 196.0], [116.0, 197.0], [117.0, 197.0], [117.0, 197.0],
    [117.0, 197.66255780621685], [117.0, 197.66255780621685], [117.0, 198.0], [118.0, 198.0],
    [118.0, 198.0], [118.0, 198.0], [119.0, 199.0], [119.0, 199.0], [119.0, 199.0], [119.0, 199.0],
    [119.0, 199.0], [119.0, 199.0], [120.0, 200.0], [120.0, 200.0], [120.0, 200.0], [120.0, 200.0],
    [121.0, 200.0], [121.0, 201.0], [121.0, 201.0], [121.0, 201.0], [122.0, 201.0], [122.0, 201.0],
    [122.0, 201.26907129039816], [122.0, 201.26907129039816], [122.0, 202.0], [122.0, 202.0],
    [122.0, 202.0], [123.0, 202.0], [123.0, 202.0], [123.0, 202.0], [123.0, 202.0], [123.0, 202.0],
    [124.0, 202.0], [124.0, 202.0], [125.0, 201.0], [126.0, 201.0], [126.0, 201.0], [127.0, 200.0],
    [127.83065265167086, 199.72311578277638], [127.83065265167086, 199.72311578277638],
    [130.0, 199.0], [130.0, 199.0], [131.0, 198.0], [134.0, 197.0],
    [134.40429289890113, 196.59570710109887], [134.40429289890113, 196.59570710109887],
    [136.0, 195.0], [139.0, 194.0], [140.42552184369322, 192.57447815630678],
    [140.42552184369322, 192.57447815630678], [141.0, 192.0], [143.0, 191.0], [145.0, 190.0],
    [146.9965682862137, 189.2013726855145], [146.99656828621372, 189.2013726855145], [150.0, 188.0],
    [152.0, 187.0], [153.38881264509243, 185.61118735490757],
    [153.38881264509246, 185.61118735490754], [155.0, 184.0], [156.0, 184.0], [159.0, 182.0],
    [159.49267404226688, 181.75366297886657], [159.49267404226694, 181.75366297886654],
    [161.0, 181.0], [162.0, 180.0], [163.0, 180.0], [164.0, 179.0], [165.0, 179.0],
    [165.0, 178.0787281686893], [165.0, 178.07872816868925], [165.0, 178.0],
    [170.20162770034125, 172.79837229965875], [170.2016277003413, 172.7983722996587],
    [175.4589246226331, 167.5410753773669], [175.4589246226332, 167.5410753773668],
    [180.71622154492496, 162.28377845507504], [180.71622154492508, 162.28377845507492],
    [183.0, 160.0], [184.0, 159.0], [185.0, 159.0], [185.0, 158.0],
    [185.55930490484374, 157.44069509515626], [185.55930490484386, 157.44069509515614],
    [186.0, 157.0], [186.0, 156.0], [187.0, 156.0], [188.0, 154.0], [189.0, 153.0],
    [189.82124943467832, 152.17875056532168], [189.82124943467844, 152.17875056532156],
    [190.0, 152.0], [190.0, 152.0], [191.0, 149.0], [192.0, 148.0], [193.0, 148.0],
    [193.0, 146.39434208737376], [193.0, 146.3943420873736], [193.0, 145.0], [194.0, 145.0],
    [194.0, 144.0], [195.0, 143.0], [196.0, 142.0], [196.0, 141.0],
    [196.15002783345645, 140.84997216654355], [196.15002783345656, 140.84997216654344],
    [197.0, 140.0], [197.0, 138.0], [198.0, 136.0], [199.0, 135.0], [199.0, 135.0],
    [199.18423964183398, 134.447281074498], [199.18423964183404, 134.44728107449785],
    [200.0, 132.0], [200.0, 132.0], [201.0, 131.0], [202.0, 129.0],
    [202.85206247799894, 128.14793752200106], [202.85206247799903, 128.14793752200097],
    [203.0, 128.0], [203.0, 126.0], [203.0, 125.0], [204.0, 125.0], [204.0, 124.0], [204.0, 124.0],
    [204.0, 123.0], [204.0, 123.0], [204.0, 122.0], [204.0, 121.77427464107026],
    [204.0, 121.77427464107015], [204.0, 120.0], [204.0, 119.0], [204.0, 118.0], [204.0, 117.0],
    [204.0, 115.0], [204.0, 114.33933403214277], [204.0, 114.33933403214266], [204.0, 114.0],
    [203.0, 113.0], [203.0, 112.0], [202.0, 111.0], [202.0, 111.0], [202.0, 110.0], [201.0, 109.0],
    [200.6185420576439, 108.2370841152878], [200.61854205764385, 108.2370841152877], [200.0, 107.0],
    [199.0, 106.0], [199.0, 105.0], [198.0, 104.0], [198.0, 104.0], [198.0, 103.0], [197.0, 103.0],
    [197.0, 102.77658860365305], [197.0, 102.77658860365294], [197.0, 102.0], [197.0, 102.0],
    [196.0, 102.0], [196.0, 101.0], [196.0, 101.0], [195.0, 101.0], [195.0, 100.0], [195.0, 100.0],
    [194.0, 100.0], [194.0, 99.0], [193.34164799472555, 99.0], [193.34164799472543, 99.0],
    [193.0, 99.0], [193.0, 99.0], [192.0, 99.0], [192.0, 98.0], [191.0, 98.0], [191.0, 98.0],
    [190.0, 98.0], [190.0, 98.0], [189.0, 98.0], [188.0, 98.0], [188.0, 98.0], [187.0, 98.0],
    [187.0, 98.0], [186.9340321598632, 97.93403215986318], [186.9340321598631, 97.93403215986311],
    [186.0, 97.0], [186.0, 97.0], [185.0, 97.0], [185.0, 97.0], [184.0, 97.0], [183.0, 97.0],
    [183.0, 97.0], [182.0, 97.0], [180.0, 97.0], [180.0, 97.0], [179.88598033924364, 97.0],
    [179.88598033924353, 97.0], [179.0, 97.0], [178.0, 97.0], [177.0, 97.0], [176.0, 98.0],
    [176.0, 98.0], [175.0, 98.0], [174.0, 98.0], [174.0, 98.0], [173.0, 98.0],
    [172.87947888108354, 98.06026055945823], [172.87947888108346, 98.06026055945827], [171.0, 99.0],
    [171.0, 99.0], [170.0, 99.0], [169.0, 99.0], [168.0, 99.0], [166.0, 100.0],
    [165.93102077095415, 100.06897922904587], [165.9310207709541, 100.06897922904592],
    [165.0, 101.0], [163.0, 101.0], [162.0, 101.0], [162.0, 101.0], [161.0, 102.0], [160.0, 103.0],
    [159.71014871695309, 103.0], [159.71014871695303, 103.0], [158.0, 103.0], [158.0, 104.0],
    [157.0, 104.0], [156.0, 105.0], [155.0, 105.0], [154.07328117586277, 105.92671882413723],
    [154.07328117586272, 105.92671882413727], [154.0, 106.0], [154.0, 106.0], [153.0, 106.0],
    [153.0, 107.0], [153.0, 107.0], [152.0, 107.0], [152.0, 107.0], [152.0, 108.0], [151.0, 108.0],
    [150.0, 109.0], [150.0, 109.0], [150.0, 109.91709181378262], [150.0, 109.91709181378269],
    [150.0, 110.0], [149.0, 110.0], [148.0, 111.0], [148.0, 111.0], [147.0, 111.0], [147.0, 112.0],
    [146.0, 112.0], [146.0, 112.0], [146.0, 113.0], [145.06218113966298, 113.0],
    [145.0621811396629, 113.0], [145.0, 113.0], [145.0, 113.0], [145.0, 114.0], [144.0, 114.0],
    [144.0, 114.0], [143.0, 115.0], [143.0, 115.0], [142.0, 116.0], [141.0, 116.0], [141.0, 117.0],
    [140.45566765548168, 117.0], [140.4556676554816, 117.0], [140.0, 117.0], [140.0, 117.0],
    [140.0, 118.0], [140.0, 118.0], [139.0, 118.0], [139.0, 119.0], [139.0, 119.0], [138.0, 119.0],
    [138.0, 120.0], [138.0, 120.0], [137.0, 120.0], [137.0, 120.97927295344581],
    [137.0, 120.9792729534459], [137.0, 121.0], [137.0, 121.0], [137.0, 121.0], [136.0, 122.0],
    [136.0, 122.0], [136.0, 122.0], [136.0, 123.0], [136.0, 123.0], [135.0, 123.0], [135.0, 124.0],
    [135.0, 124.0], [135.0, 124.0], [135.0, 125.0], [134.0, 125.0], [134.0, 125.0], [134.0, 126.0],
    [134.0, 126.0], [134.0, 126.0], [134.0, 126.0],
];

#[cfg(test)]
mod tests {
    use super::{builtin_points, BUILTINS, BUILTIN_COUNT};

    #[test]
    fn table_sizes() {
        let sizes: Vec<usize> = BUILTINS.iter().map(|(_, raw)| raw.len()).collect();
        assert_eq!(sizes, vec![158, 49, 6, 66, 488]);
        assert_eq!(BUILTINS.len(), BUILTIN_COUNT);
    }

    #[test]
    fn lookup_by_name() {
        let zig = builtin_points("zig-zag").unwrap();
        assert_eq!(zig.len(), 6);
        assert_eq!((zig[0].x, zig[0].y), (307.0, 216.0));
        assert!(builtin_points("circle").is_none());
    }
}
