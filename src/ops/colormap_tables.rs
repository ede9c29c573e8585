// Perceptually uniform maps as full 256-entry tables, index = 8-bit intensity.

use super::colormap::Lut;

pub(super) static VIRIDIS: Lut = [
    [68, 1, 84], [68, 2, 85], [68, 4, 87], [68, 5, 88], [68, 7, 90], [69, 8, 91],
    [69, 9, 92], [69, 11, 94], [69, 12, 95], [69, 14, 96], [69, 15, 98], [69, 16, 99],
    [69, 18, 100], [69, 19, 102], [69, 21, 103], [69, 22, 104], [69, 23, 105], [69, 25, 107],
    [69, 26, 108], [69, 28, 109], [69, 29, 110], [69, 30, 111], [69, 32, 112], [69, 33, 113],
    [69, 34, 115], [69, 36, 116], [69, 37, 117], [69, 38, 118], [69, 40, 119], [69, 41, 120],
    [69, 42, 120], [69, 43, 121], [69, 45, 122], [68, 46, 123], [68, 47, 124], [68, 49, 125],
    [68, 50, 126], [68, 51, 126], [68, 52, 127], [67, 54, 128], [67, 55, 128], [67, 56, 129],
    [67, 57, 130], [67, 58, 130], [66, 60, 131], [66, 61, 132], [66, 62, 132], [65, 63, 133],
    [65, 64, 133], [65, 66, 134], [64, 67, 134], [64, 68, 135], [64, 69, 135], [63, 70, 136],
    [63, 71, 136], [63, 72, 136], [62, 74, 137], [62, 75, 137], [62, 76, 137], [61, 77, 138],
    [61, 78, 138], [60, 79, 138], [60, 80, 139], [59, 81, 139], [59, 82, 139], [58, 83, 139],
    [58, 84, 140], [58, 85, 140], [57, 87, 140], [57, 88, 140], [56, 89, 140], [56, 90, 140],
    [55, 91, 141], [55, 92, 141], [54, 93, 141], [54, 94, 141], [53, 95, 141], [53, 96, 141],
    [52, 97, 141], [52, 98, 141], [51, 99, 142], [51, 100, 142], [50, 101, 142], [50, 102, 142],
    [49, 103, 142], [49, 104, 142], [48, 105, 142], [48, 106, 142], [47, 107, 142], [47, 108, 142],
    [46, 109, 142], [46, 110, 142], [45, 111, 142], [45, 112, 142], [44, 113, 142], [44, 114, 142],
    [43, 115, 142], [43, 116, 142], [42, 117, 142], [42, 118, 142], [41, 119, 142], [41, 120, 142],
    [40, 121, 142], [40, 122, 142], [39, 123, 142], [39, 124, 142], [39, 124, 142], [38, 125, 142],
    [38, 126, 142], [37, 127, 142], [37, 128, 142], [37, 129, 142], [36, 130, 141], [36, 131, 141],
    [36, 132, 141], [35, 133, 141], [35, 134, 141], [35, 135, 141], [34, 136, 141], [34, 137, 141],
    [34, 138, 141], [34, 139, 141], [34, 140, 141], [33, 141, 141], [33, 142, 140], [33, 143, 140],
    [33, 144, 140], [33, 145, 140], [33, 145, 140], [33, 146, 140], [33, 147, 140], [33, 148, 139],
    [33, 149, 139], [33, 150, 139], [33, 151, 139], [33, 152, 139], [33, 153, 138], [33, 154, 138],
    [34, 155, 138], [34, 156, 138], [34, 157, 137], [34, 158, 137], [35, 159, 137], [35, 159, 136],
    [35, 160, 136], [36, 161, 136], [36, 162, 135], [37, 163, 135], [37, 164, 135], [38, 165, 134],
    [38, 166, 134], [39, 167, 133], [39, 168, 133], [40, 169, 132], [41, 170, 132], [41, 171, 131],
    [42, 171, 131], [43, 172, 130], [44, 173, 130], [45, 174, 129], [46, 175, 129], [47, 176, 128],
    [48, 177, 127], [49, 178, 127], [50, 179, 126], [51, 179, 125], [52, 180, 125], [53, 181, 124],
    [54, 182, 123], [56, 183, 122], [57, 184, 121], [58, 185, 121], [60, 186, 120], [61, 186, 119],
    [63, 187, 118], [64, 188, 117], [66, 189, 116], [67, 190, 115], [69, 191, 114], [70, 191, 113],
    [72, 192, 112], [74, 193, 111], [76, 194, 110], [78, 195, 108], [79, 195, 107], [81, 196, 106],
    [83, 197, 105], [85, 198, 104], [87, 199, 102], [89, 199, 101], [91, 200, 100], [93, 201, 98],
    [96, 202, 97], [98, 202, 96], [100, 203, 94], [102, 204, 93], [104, 204, 92], [106, 205, 90],
    [109, 206, 89], [111, 206, 87], [113, 207, 86], [116, 208, 84], [118, 208, 83], [121, 209, 81],
    [123, 210, 80], [126, 210, 78], [128, 211, 77], [131, 211, 75], [133, 212, 73], [136, 213, 72],
    [139, 213, 70], [141, 214, 69], [144, 214, 67], [147, 215, 65], [149, 215, 64], [152, 216, 62],
    [155, 216, 61], [157, 217, 59], [160, 217, 58], [163, 218, 56], [166, 218, 54], [168, 219, 53],
    [171, 219, 51], [174, 220, 50], [177, 220, 48], [180, 221, 47], [182, 221, 46], [185, 222, 44],
    [188, 222, 43], [191, 222, 42], [194, 223, 40], [196, 223, 39], [199, 224, 38], [202, 224, 37],
    [205, 224, 36], [207, 225, 35], [210, 225, 34], [213, 225, 33], [215, 226, 33], [218, 226, 32],
    [220, 226, 31], [223, 227, 31], [225, 227, 31], [228, 227, 30], [230, 228, 30], [233, 228, 30],
    [235, 228, 30], [237, 229, 30], [239, 229, 31], [242, 229, 31], [244, 230, 32], [246, 230, 32],
    [248, 230, 33], [249, 230, 34], [251, 231, 36], [253, 231, 37],
];

pub(super) static PLASMA: Lut = [
    [13, 8, 135], [15, 8, 136], [17, 8, 137], [20, 8, 137], [22, 8, 138], [24, 8, 139],
    [26, 8, 140], [28, 8, 141], [30, 8, 142], [32, 8, 143], [34, 7, 144], [36, 7, 144],
    [38, 7, 145], [40, 7, 146], [42, 6, 147], [44, 6, 148], [46, 6, 149], [48, 5, 150],
    [50, 5, 151], [52, 5, 152], [53, 4, 152], [55, 4, 153], [57, 4, 154], [59, 3, 155],
    [61, 3, 156], [63, 2, 156], [64, 2, 157], [66, 2, 158], [68, 1, 159], [70, 1, 159],
    [72, 1, 160], [73, 1, 161], [75, 0, 161], [77, 0, 162], [79, 0, 163], [80, 0, 163],
    [82, 0, 164], [84, 0, 164], [85, 0, 165], [87, 0, 165], [89, 0, 166], [90, 0, 166],
    [92, 0, 166], [94, 0, 167], [95, 0, 167], [97, 0, 167], [99, 0, 168], [100, 0, 168],
    [102, 0, 168], [103, 0, 168], [105, 0, 168], [106, 0, 169], [108, 0, 169], [110, 0, 169],
    [111, 0, 169], [113, 0, 169], [114, 0, 169], [116, 0, 169], [117, 1, 169], [119, 1, 169],
    [120, 1, 169], [122, 2, 168], [123, 2, 168], [125, 3, 168], [126, 3, 168], [128, 4, 168],
    [129, 4, 167], [131, 5, 167], [132, 6, 167], [134, 6, 166], [135, 7, 166], [136, 8, 166],
    [138, 9, 165], [139, 9, 165], [141, 10, 164], [142, 11, 164], [143, 12, 163], [145, 13, 163],
    [146, 14, 162], [147, 14, 161], [149, 15, 161], [150, 16, 160], [151, 17, 160], [153, 18, 159],
    [154, 19, 158], [155, 20, 158], [157, 21, 157], [158, 22, 156], [159, 23, 155], [161, 24, 155],
    [162, 25, 154], [163, 27, 153], [164, 28, 152], [166, 29, 152], [167, 30, 151], [168, 31, 150],
    [169, 32, 149], [171, 33, 148], [172, 34, 148], [173, 36, 147], [174, 37, 146], [175, 38, 145],
    [177, 39, 144], [178, 40, 143], [179, 42, 142], [180, 43, 141], [181, 44, 140], [182, 45, 140],
    [183, 47, 139], [185, 48, 138], [186, 49, 137], [187, 50, 136], [188, 51, 135], [189, 53, 134],
    [190, 54, 133], [191, 55, 132], [192, 57, 131], [193, 58, 130], [194, 59, 129], [195, 60, 128],
    [196, 62, 127], [197, 63, 126], [199, 64, 125], [200, 65, 124], [201, 67, 123], [202, 68, 122],
    [203, 69, 121], [204, 70, 120], [204, 72, 120], [205, 73, 119], [206, 74, 118], [207, 75, 117],
    [208, 77, 116], [209, 78, 115], [210, 79, 114], [211, 80, 113], [212, 81, 112], [213, 83, 111],
    [214, 84, 110], [215, 85, 109], [215, 86, 109], [216, 87, 108], [217, 89, 107], [218, 90, 106],
    [219, 91, 105], [220, 92, 104], [220, 94, 103], [221, 95, 102], [222, 96, 101], [223, 97, 100],
    [224, 98, 100], [224, 99, 99], [225, 101, 98], [226, 102, 97], [227, 103, 96], [227, 104, 95],
    [228, 105, 94], [229, 107, 93], [230, 108, 92], [230, 109, 92], [231, 110, 91], [232, 111, 90],
    [232, 113, 89], [233, 114, 88], [234, 115, 87], [234, 116, 86], [235, 117, 86], [236, 118, 85],
    [236, 120, 84], [237, 121, 83], [237, 122, 82], [238, 123, 81], [239, 125, 80], [239, 126, 79],
    [240, 127, 79], [240, 128, 78], [241, 129, 77], [241, 131, 76], [242, 132, 75], [242, 133, 74],
    [243, 134, 74], [244, 136, 73], [244, 137, 72], [244, 138, 71], [245, 139, 70], [245, 141, 69],
    [246, 142, 68], [246, 143, 68], [247, 145, 67], [247, 146, 66], [248, 147, 65], [248, 149, 64],
    [248, 150, 63], [249, 151, 62], [249, 153, 62], [250, 154, 61], [250, 156, 60], [250, 157, 59],
    [251, 158, 58], [251, 160, 57], [251, 161, 56], [252, 163, 55], [252, 164, 54], [252, 166, 54],
    [253, 167, 53], [253, 169, 52], [253, 170, 51], [253, 172, 50], [254, 173, 49], [254, 175, 48],
    [254, 177, 48], [254, 178, 47], [254, 180, 46], [255, 181, 45], [255, 183, 44], [255, 185, 44],
    [255, 186, 43], [255, 188, 42], [255, 190, 41], [255, 191, 41], [255, 193, 40], [255, 195, 39],
    [255, 196, 38], [255, 198, 38], [255, 200, 37], [255, 201, 36], [255, 203, 36], [255, 205, 35],
    [255, 206, 34], [254, 208, 34], [254, 210, 33], [254, 212, 33], [254, 213, 32], [254, 215, 32],
    [253, 217, 31], [253, 218, 31], [253, 220, 31], [252, 222, 30], [252, 224, 30], [251, 225, 30],
    [251, 227, 30], [251, 229, 29], [250, 230, 29], [249, 232, 29], [249, 233, 29], [248, 235, 29],
    [248, 237, 29], [247, 238, 30], [246, 240, 30], [245, 241, 30], [245, 242, 30], [244, 244, 31],
    [243, 245, 31], [242, 246, 32], [241, 248, 32], [240, 249, 33],
];

pub(super) static MAGMA: Lut = [
    [0, 0, 4], [0, 1, 6], [1, 1, 9], [1, 2, 11], [2, 2, 14], [2, 3, 16],
    [3, 3, 19], [3, 4, 21], [4, 4, 24], [5, 5, 26], [6, 5, 28], [6, 5, 31],
    [7, 6, 33], [8, 6, 36], [9, 6, 38], [10, 7, 40], [11, 7, 43], [12, 7, 45],
    [13, 8, 47], [15, 8, 50], [16, 8, 52], [17, 9, 54], [18, 9, 56], [19, 9, 59],
    [21, 9, 61], [22, 10, 63], [23, 10, 65], [24, 10, 67], [26, 10, 69], [27, 10, 71],
    [29, 11, 73], [30, 11, 75], [31, 11, 77], [33, 11, 79], [34, 12, 81], [36, 12, 83],
    [37, 12, 85], [39, 12, 87], [40, 12, 89], [42, 13, 91], [43, 13, 92], [45, 13, 94],
    [46, 13, 96], [48, 13, 97], [49, 14, 99], [51, 14, 101], [52, 14, 102], [54, 14, 104],
    [56, 14, 105], [57, 15, 107], [59, 15, 108], [60, 15, 110], [62, 15, 111], [64, 15, 112],
    [65, 16, 113], [67, 16, 115], [68, 16, 116], [70, 16, 117], [72, 17, 118], [73, 17, 119],
    [75, 17, 120], [76, 17, 121], [78, 18, 122], [80, 18, 123], [81, 18, 124], [83, 19, 125],
    [85, 19, 126], [86, 19, 127], [88, 20, 128], [89, 20, 128], [91, 21, 129], [93, 21, 130],
    [94, 21, 131], [96, 22, 131], [97, 22, 132], [99, 23, 132], [101, 23, 133], [102, 24, 133],
    [104, 24, 134], [105, 25, 134], [107, 25, 134], [109, 26, 135], [110, 26, 135], [112, 27, 135],
    [113, 27, 136], [115, 28, 136], [117, 28, 136], [118, 29, 136], [120, 29, 136], [121, 30, 136],
    [123, 30, 136], [125, 31, 136], [126, 31, 136], [128, 32, 136], [130, 32, 136], [131, 33, 136],
    [133, 33, 136], [134, 34, 136], [136, 35, 136], [138, 35, 135], [139, 36, 135], [141, 36, 135],
    [142, 37, 135], [144, 38, 134], [146, 38, 134], [147, 39, 134], [149, 39, 133], [151, 40, 133],
    [152, 41, 132], [154, 41, 132], [155, 42, 132], [157, 43, 131], [159, 43, 131], [160, 44, 130],
    [162, 45, 129], [163, 45, 129], [165, 46, 128], [167, 47, 128], [168, 48, 127], [170, 48, 127],
    [171, 49, 126], [173, 50, 125], [174, 51, 125], [176, 51, 124], [178, 52, 123], [179, 53, 123],
    [181, 54, 122], [182, 55, 121], [184, 55, 121], [185, 56, 120], [187, 57, 119], [188, 58, 118],
    [190, 59, 118], [191, 60, 117], [193, 60, 116], [194, 61, 115], [196, 62, 115], [197, 63, 114],
    [199, 64, 113], [200, 65, 112], [202, 66, 112], [203, 67, 111], [205, 68, 110], [206, 69, 109],
    [208, 70, 109], [209, 71, 108], [210, 72, 107], [212, 73, 107], [213, 74, 106], [214, 75, 105],
    [216, 76, 105], [217, 77, 104], [218, 78, 103], [220, 79, 103], [221, 81, 102], [222, 82, 102],
    [223, 83, 101], [224, 84, 100], [226, 85, 100], [227, 87, 99], [228, 88, 99], [229, 89, 98],
    [230, 91, 98], [231, 92, 97], [232, 93, 97], [233, 95, 97], [234, 96, 96], [235, 97, 96],
    [236, 99, 96], [237, 100, 95], [238, 102, 95], [239, 103, 95], [240, 105, 95], [241, 106, 95],
    [242, 108, 94], [243, 109, 94], [243, 111, 94], [244, 112, 94], [245, 114, 94], [245, 116, 94],
    [246, 117, 94], [247, 119, 94], [247, 121, 94], [248, 122, 95], [249, 124, 95], [249, 126, 95],
    [250, 127, 95], [250, 129, 95], [251, 131, 96], [251, 133, 96], [252, 135, 96], [252, 137, 97],
    [252, 138, 97], [253, 140, 98], [253, 142, 99], [253, 144, 100], [253, 146, 100], [254, 148, 101],
    [254, 150, 102], [254, 152, 103], [254, 153, 104], [254, 155, 105], [254, 157, 106], [255, 159, 107],
    [255, 161, 108], [255, 163, 109], [255, 165, 110], [255, 167, 111], [255, 169, 112], [254, 171, 113],
    [254, 174, 115], [254, 176, 116], [254, 178, 117], [254, 180, 119], [254, 182, 120], [254, 184, 121],
    [254, 186, 123], [253, 188, 124], [253, 190, 126], [253, 192, 127], [253, 194, 129], [252, 196, 130],
    [252, 198, 132], [252, 201, 134], [252, 203, 135], [251, 205, 137], [251, 207, 139], [251, 209, 140],
    [251, 211, 142], [250, 213, 144], [250, 215, 146], [250, 217, 148], [250, 219, 149], [249, 221, 151],
    [249, 222, 153], [249, 224, 155], [249, 226, 157], [248, 228, 159], [248, 230, 160], [248, 232, 162],
    [248, 233, 164], [248, 235, 166], [248, 237, 168], [248, 238, 170], [248, 240, 172], [248, 241, 174],
    [248, 243, 175], [248, 244, 177], [249, 245, 179], [249, 247, 181], [249, 248, 183], [250, 249, 184],
    [250, 250, 186], [251, 251, 188], [251, 252, 189], [252, 253, 191],
];

pub(super) static INFERNO: Lut = [
    [0, 0, 4], [0, 1, 8], [0, 1, 12], [1, 2, 15], [1, 2, 19], [2, 2, 22],
    [2, 3, 25], [3, 3, 28], [4, 4, 31], [4, 4, 34], [5, 4, 37], [6, 5, 40],
    [7, 5, 43], [8, 5, 45], [9, 5, 48], [10, 6, 50], [11, 6, 53], [12, 6, 55],
    [14, 6, 57], [15, 7, 59], [16, 7, 62], [17, 7, 64], [19, 7, 66], [20, 7, 67],
    [22, 8, 69], [23, 8, 71], [25, 8, 73], [26, 8, 75], [28, 8, 76], [29, 8, 78],
    [31, 9, 79], [32, 9, 81], [34, 9, 82], [35, 9, 84], [37, 9, 85], [39, 9, 86],
    [40, 10, 88], [42, 10, 89], [43, 10, 90], [45, 10, 91], [47, 10, 92], [48, 10, 93],
    [50, 11, 94], [52, 11, 95], [54, 11, 96], [55, 11, 97], [57, 11, 98], [59, 12, 99],
    [60, 12, 100], [62, 12, 101], [64, 12, 102], [65, 12, 103], [67, 13, 103], [69, 13, 104],
    [71, 13, 105], [72, 13, 105], [74, 14, 106], [76, 14, 107], [77, 14, 107], [79, 15, 108],
    [81, 15, 108], [82, 15, 109], [84, 15, 109], [86, 16, 110], [87, 16, 110], [89, 16, 110],
    [91, 17, 111], [92, 17, 111], [94, 18, 111], [96, 18, 112], [98, 18, 112], [99, 19, 112],
    [101, 19, 112], [103, 20, 113], [104, 20, 113], [106, 20, 113], [107, 21, 113], [109, 21, 113],
    [111, 22, 113], [112, 22, 113], [114, 23, 113], [116, 23, 113], [117, 24, 113], [119, 24, 113],
    [121, 25, 113], [122, 25, 113], [124, 26, 113], [125, 26, 112], [127, 27, 112], [129, 27, 112],
    [130, 28, 112], [132, 29, 111], [133, 29, 111], [135, 30, 111], [137, 30, 110], [138, 31, 110],
    [140, 32, 110], [141, 32, 109], [143, 33, 109], [144, 33, 108], [146, 34, 108], [148, 35, 107],
    [149, 35, 107], [151, 36, 106], [152, 37, 105], [154, 37, 105], [155, 38, 104], [157, 39, 103],
    [159, 39, 103], [160, 40, 102], [162, 41, 101], [163, 42, 100], [165, 42, 100], [166, 43, 99],
    [168, 44, 98], [169, 45, 97], [171, 45, 96], [172, 46, 95], [174, 47, 94], [175, 48, 93],
    [177, 49, 92], [178, 49, 91], [180, 50, 90], [181, 51, 89], [183, 52, 88], [184, 53, 87],
    [186, 54, 86], [187, 55, 85], [189, 55, 83], [190, 56, 82], [191, 57, 81], [193, 58, 80],
    [194, 59, 78], [196, 60, 77], [197, 61, 76], [198, 62, 74], [200, 63, 73], [201, 64, 72],
    [202, 65, 70], [204, 66, 69], [205, 67, 68], [206, 68, 66], [208, 69, 65], [209, 71, 63],
    [210, 72, 62], [211, 73, 61], [213, 74, 59], [214, 75, 58], [215, 76, 56], [216, 77, 55],
    [217, 79, 53], [219, 80, 52], [220, 81, 51], [221, 82, 49], [222, 83, 48], [223, 85, 46],
    [224, 86, 45], [225, 87, 43], [226, 89, 42], [227, 90, 41], [228, 91, 39], [229, 93, 38],
    [230, 94, 37], [231, 95, 35], [232, 97, 34], [233, 98, 33], [234, 100, 31], [235, 101, 30],
    [236, 103, 29], [237, 104, 28], [237, 106, 26], [238, 107, 25], [239, 109, 24], [240, 110, 23],
    [241, 112, 22], [241, 114, 21], [242, 115, 20], [243, 117, 19], [243, 118, 18], [244, 120, 17],
    [244, 122, 16], [245, 123, 15], [245, 125, 14], [246, 127, 14], [246, 129, 13], [247, 131, 12],
    [247, 132, 11], [248, 134, 11], [248, 136, 10], [248, 138, 10], [249, 140, 9], [249, 142, 9],
    [249, 143, 9], [250, 145, 9], [250, 147, 9], [250, 149, 9], [250, 150, 9], [250, 152, 9],
    [251, 154, 9], [251, 156, 9], [251, 158, 10], [251, 160, 10], [251, 162, 11], [251, 163, 11],
    [251, 165, 12], [251, 167, 12], [251, 169, 13], [251, 171, 14], [251, 173, 15], [251, 175, 16],
    [251, 177, 17], [251, 179, 18], [250, 181, 19], [250, 183, 21], [250, 185, 22], [250, 187, 24],
    [250, 189, 25], [250, 191, 27], [249, 193, 29], [249, 195, 31], [249, 197, 33], [249, 199, 35],
    [248, 201, 37], [248, 203, 39], [248, 205, 41], [247, 207, 44], [247, 209, 46], [247, 211, 49],
    [247, 213, 52], [246, 215, 54], [246, 217, 57], [246, 219, 60], [246, 221, 63], [246, 223, 67],
    [245, 224, 70], [245, 226, 74], [245, 228, 77], [245, 230, 81], [245, 232, 84], [245, 233, 88],
    [245, 235, 92], [245, 237, 96], [245, 238, 100], [245, 240, 105], [245, 241, 109], [246, 243, 114],
    [246, 244, 118], [246, 246, 123], [247, 247, 128], [247, 248, 133], [248, 250, 138], [248, 251, 143],
    [249, 252, 148], [250, 253, 153], [251, 254, 159], [252, 255, 164],
];
